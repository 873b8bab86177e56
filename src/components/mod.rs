mod chat_widget;
mod message_list;

pub use chat_widget::ChatWidget;
pub use message_list::MessageList;
