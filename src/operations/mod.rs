// Operations module
// Page features around the carousel: gallery, likes, chat, chatbot, sign-up

pub mod chat;
pub mod chatbot;
pub mod gallery;
pub mod likes;
pub mod signup;

pub use chat::{ChatMessage, ChatSession};
pub use chatbot::{Author, BotEntry, Chatbot, Topic};
pub use gallery::ProfileGallery;
pub use likes::{FloatingHeart, LikeBoard};
pub use signup::{AuthOverlay, AuthTab, SOCIAL_PROVIDERS};
