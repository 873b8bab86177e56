use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::MessageList;
use crate::config;
use crate::session::{self, BrowserSessionStore};
use crate::widget::{ChatController, SendAction};

// Delay before focusing the composer, letting the open transition settle.
const FOCUS_DELAY_MS: i32 = 180;

const FOCUSABLE_SELECTOR: &str = "button,[href],input,textarea,[tabindex]:not([tabindex=\"-1\"])";

pub enum Msg {
    ToggleOpen,
    Minimize,
    Send,
    Received(String),
    ComposerKey(KeyboardEvent),
    TrapFocus(KeyboardEvent),
}

/// FAB plus dialog. All chat semantics live in the [`ChatController`]; this
/// component maps DOM events onto it and renders its state. The dialog is
/// built on the first open and only ever hidden afterwards, and an outside
/// click never closes it.
pub struct ChatWidget {
    ctl: ChatController<BrowserSessionStore>,
    dialog_ref: NodeRef,
    input_ref: NodeRef,
    messages_ref: NodeRef,
}

impl Component for ChatWidget {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let store = BrowserSessionStore::new();
        let session_id = session::session_id(&store);
        let endpoint = config::resolve_endpoint();
        ChatWidget {
            ctl: ChatController::new(store, endpoint, session_id),
            dialog_ref: NodeRef::default(),
            input_ref: NodeRef::default(),
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleOpen => {
                if self.ctl.toggle() {
                    self.schedule_composer_focus();
                }
                true
            }
            Msg::Minimize => {
                self.ctl.minimize();
                true
            }
            Msg::ComposerKey(event) => {
                if event.key() == "Enter" {
                    ctx.link().send_message(Msg::Send);
                }
                false
            }
            Msg::Send => {
                let raw = self.composer_value();
                match self.ctl.begin_send(&raw) {
                    SendAction::Ignored | SendAction::Busy => false,
                    SendAction::Replied => {
                        self.clear_composer();
                        true
                    }
                    SendAction::Request { endpoint, request } => {
                        self.clear_composer();
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let reply = api::send_chat_message(&endpoint, &request).await;
                            link.send_message(Msg::Received(reply));
                        });
                        true
                    }
                }
            }
            Msg::Received(reply) => {
                self.ctl.finish_send(reply);
                true
            }
            Msg::TrapFocus(event) => {
                self.trap_focus(&event);
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest entry in view.
        if let Some(messages) = self.messages_ref.cast::<web_sys::Element>() {
            messages.set_scroll_top(messages.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let open = self.ctl.state().is_open();
        let dialog_style = format!(
            "position:fixed; right:1.5em; bottom:5.5em; width:340px; max-width:calc(100vw - 2em); \
             height:440px; flex-direction:column; background:#fff; border:1px solid #ddd; \
             border-radius:8px; box-shadow:0 8px 24px rgba(0,0,0,0.15); overflow:hidden; display:{};",
            if open { "flex" } else { "none" }
        );

        html! {
            <>
                <button
                    onclick={link.callback(|_| Msg::ToggleOpen)}
                    aria-label="Open AssistIQ chat"
                    style="position:fixed; right:1.5em; bottom:1.5em; width:56px; height:56px; \
                           border-radius:50%; border:none; background:#007bff; color:white; \
                           font-size:1.4em; cursor:pointer; box-shadow:0 4px 12px rgba(0,0,0,0.25);"
                >
                    { "💬" }
                </button>
                if self.ctl.state().is_built() {
                    <section
                        ref={self.dialog_ref.clone()}
                        role="dialog"
                        aria-label="AssistIQ Chat"
                        aria-modal="true"
                        aria-hidden={if open { "false" } else { "true" }}
                        style={dialog_style}
                        onkeydown={link.callback(Msg::TrapFocus)}
                    >
                        <div style="display:flex; align-items:center; justify-content:space-between; \
                                    padding:0.6em 1em; background:#f8f9fa; border-bottom:1px solid #ddd;">
                            <div style="font-weight:bold; color:#333;">{ "AssistIQ Chat" }</div>
                            <button
                                onclick={link.callback(|_| Msg::Minimize)}
                                aria-label="Minimize chat"
                                style="border:none; background:none; font-size:1em; cursor:pointer; color:#555;"
                            >
                                { "—" }
                            </button>
                        </div>
                        <div
                            ref={self.messages_ref.clone()}
                            tabindex="0"
                            aria-live="polite"
                            style="flex:1; overflow-y:auto; padding:1em; display:flex; \
                                   flex-direction:column; gap:0.5em;"
                        >
                            <MessageList entries={self.ctl.entries().to_vec()} />
                        </div>
                        <div style="display:flex; gap:0.5em; padding:0.6em; border-top:1px solid #ddd;">
                            <input
                                ref={self.input_ref.clone()}
                                placeholder="Type your IT question…"
                                aria-label="Type your message"
                                onkeydown={link.callback(Msg::ComposerKey)}
                                style="flex:1; padding:0.5em; border:1px solid #ccc; border-radius:4px;"
                            />
                            <button
                                onclick={link.callback(|_| Msg::Send)}
                                disabled={self.ctl.is_pending()}
                                style={if self.ctl.is_pending() {
                                    "padding:0.5em 1em; border:none; border-radius:4px; background:#ccc; color:white; cursor:not-allowed;"
                                } else {
                                    "padding:0.5em 1em; border:none; border-radius:4px; background:#007bff; color:white; cursor:pointer;"
                                }}
                            >
                                { if self.ctl.is_pending() { "…" } else { "Send" } }
                            </button>
                        </div>
                        <div style="padding:0.4em 1em 0.8em; font-size:0.75em; color:#888;">
                            { "Powered by Amazon Lex. Conversations may be logged to improve the service." }
                        </div>
                    </section>
                }
            </>
        }
    }
}

impl ChatWidget {
    fn composer_value(&self) -> String {
        self.input_ref
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn clear_composer(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn schedule_composer_focus(&self) {
        let input_ref = self.input_ref.clone();
        let focus = Closure::once_into_js(move || {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                focus.unchecked_ref(),
                FOCUS_DELAY_MS,
            );
        }
    }

    // Wrap Tab / Shift+Tab at the edges of the dialog's focusable controls.
    fn trap_focus(&self, event: &KeyboardEvent) {
        if event.key() != "Tab" {
            return;
        }
        let Some(dialog) = self.dialog_ref.cast::<web_sys::Element>() else {
            return;
        };
        let Ok(focusables) = dialog.query_selector_all(FOCUSABLE_SELECTOR) else {
            return;
        };
        if focusables.length() == 0 {
            return;
        }
        let first = focusables.get(0);
        let last = focusables.get(focusables.length() - 1);
        let active: Option<web_sys::Node> = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .map(Into::into);

        let focus = |node: Option<web_sys::Node>| {
            if let Some(el) = node.and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let _ = el.focus();
            }
        };

        if event.shift_key() {
            if active == first {
                event.prevent_default();
                focus(last);
            }
        } else if active == last {
            event.prevent_default();
            focus(first);
        }
    }
}
