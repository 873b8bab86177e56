use yew::prelude::*;

use crate::types::{Sender, TranscriptEntry};

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub entries: Vec<TranscriptEntry>,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let entries = &props.entries;

    if entries.is_empty() {
        html! {
            <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#888; text-align:center;">
                { "Ask an IT question to get started" }
            </div>
        }
    } else {
        html! {
            <>
                { for entries.iter().map(|entry| {
                    let (who, style) = match entry.sender {
                        Sender::User => (
                            "user",
                            "align-self:flex-end; background:#007bff; color:white; padding:0.5em 0.8em; border-radius:12px 12px 2px 12px; max-width:85%; white-space:pre-wrap; word-break:break-word;",
                        ),
                        Sender::Bot => (
                            "bot",
                            "align-self:flex-start; background:#f1f3f5; color:#333; padding:0.5em 0.8em; border-radius:12px 12px 12px 2px; max-width:85%; white-space:pre-wrap; word-break:break-word;",
                        ),
                    };
                    html! {
                        <div class={classes!("msg", who)} style={style}>
                            { &entry.text }
                        </div>
                    }
                })}
            </>
        }
    }
}
