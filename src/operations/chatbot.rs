// Chatbot
// Help widget that answers with canned responses after a typing delay

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::ChatbotConfig;
use crate::utilities::{InputLine, TimerSlot};

const GREETINGS: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! Welcome to HeartMatch. What can I assist you with?",
    "Welcome! How may I help you find your perfect match?",
];

const PREMIUM: &[&str] = &[
    "Our Premium membership includes:\n- Unlimited messaging\n- See who likes you\n- Advanced filters\n- Priority matching\n\nWould you like to learn more about pricing?",
];

const SAFETY: &[&str] = &[
    "Your safety is our top priority. We have:\n- Profile verification\n- 24/7 monitoring\n- Secure messaging\n- Report system\n\nRead more about our safety measures in our Safety Center.",
];

const ACCOUNT: &[&str] = &[
    "To create an account:\n1. Click 'Get Started'\n2. Fill in your details\n3. Verify your email\n4. Complete your profile\n\nNeed help with registration?",
];

const FALLBACK: &[&str] = &[
    "I'll connect you with our support team for more detailed assistance. In the meantime, you can check our FAQ section.",
    "Let me help you with that. Could you please provide more details about your question?",
    "I understand your question. Would you like me to connect you with a human representative?",
];

const PREMIUM_ACTIONS: &[&str] = &["View Pricing", "Compare Plans", "Start Free Trial"];
const ACCOUNT_ACTIONS: &[&str] = &["Create Account", "Reset Password", "Contact Support"];

/// What a user message is about, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Premium,
    Safety,
    Account,
    Other,
}

impl Topic {
    /// Case-insensitive keyword match; the first matching topic wins
    pub fn classify(message: &str) -> Self {
        let msg = message.to_lowercase();

        if mentions(&msg, &["hi", "hello", "hey"]) {
            Self::Greeting
        } else if mentions(&msg, &["premium", "membership", "subscribe"]) {
            Self::Premium
        } else if mentions(&msg, &["safe", "security", "protect"]) {
            Self::Safety
        } else if mentions(&msg, &["account", "register", "sign up"]) {
            Self::Account
        } else {
            Self::Other
        }
    }

    pub fn responses(self) -> &'static [&'static str] {
        match self {
            Self::Greeting => GREETINGS,
            Self::Premium => PREMIUM,
            Self::Safety => SAFETY,
            Self::Account => ACCOUNT,
            Self::Other => FALLBACK,
        }
    }
}

fn mentions(msg: &str, words: &[&str]) -> bool {
    words.iter().any(|w| msg.contains(w))
}

/// Follow-up actions offered after the reply to `message`
pub fn suggested_actions(message: &str) -> Option<&'static [&'static str]> {
    let msg = message.to_lowercase();
    if msg.contains("premium") {
        Some(PREMIUM_ACTIONS)
    } else if msg.contains("account") {
        Some(ACCOUNT_ACTIONS)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BotEntry {
    Message {
        author: Author,
        text: String,
        at: DateTime<Local>,
    },
    Suggestions(Vec<String>),
}

#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    text: String,
    suggestions: Option<Vec<String>>,
}

pub struct Chatbot {
    config: ChatbotConfig,
    open: bool,
    unread_badge: bool,
    entries: Vec<BotEntry>,
    /// Replies still "typing", in due order
    pending: VecDeque<PendingReply>,
    welcome: TimerSlot,
    selected_suggestion: usize,
    rng: StdRng,
    pub input: InputLine,
}

impl Chatbot {
    pub fn new(config: ChatbotConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_rng(config: ChatbotConfig, rng: StdRng) -> Self {
        Self {
            config,
            open: false,
            unread_badge: true,
            entries: Vec::new(),
            pending: VecDeque::new(),
            welcome: TimerSlot::new(),
            selected_suggestion: 0,
            rng,
            input: InputLine::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_unread_badge(&self) -> bool {
        self.unread_badge
    }

    pub fn entries(&self) -> &[BotEntry] {
        &self.entries
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Open or close the panel.
    ///
    /// Opening clears the badge and, on an empty conversation, schedules
    /// the welcome message.
    pub fn toggle(&mut self, now: Instant) {
        self.open = !self.open;
        debug!(open = self.open, "chatbot toggled");
        if !self.open {
            return;
        }

        self.unread_badge = false;
        if self.entries.is_empty() && self.pending.is_empty() && !self.welcome.is_pending() {
            self.welcome
                .schedule(now, Duration::from_millis(self.config.welcome_delay_ms));
        }
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            debug!("chatbot closed");
        }
    }

    /// Post a user message and queue the bot's reply; blank text is ignored
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.entries.push(BotEntry::Message {
            author: Author::User,
            text: text.to_string(),
            at: Local::now(),
        });

        let topic = Topic::classify(text);
        let reply = topic
            .responses()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string();
        let suggestions = suggested_actions(text)
            .map(|actions| actions.iter().map(|a| a.to_string()).collect());

        debug!(?topic, "chatbot reply queued");
        self.pending.push_back(PendingReply {
            due: now + Duration::from_millis(self.config.typing_delay_ms),
            text: reply,
            suggestions,
        });
        true
    }

    /// Send the input line, or the selected suggestion when the line is blank
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.input.is_blank() {
            return self.choose_suggestion(now);
        }
        let text = self.input.take();
        self.send(&text, now)
    }

    /// Most recent set of suggested actions
    pub fn latest_suggestions(&self) -> Option<&[String]> {
        self.entries.iter().rev().find_map(|entry| match entry {
            BotEntry::Suggestions(actions) => Some(actions.as_slice()),
            BotEntry::Message { .. } => None,
        })
    }

    pub fn selected_suggestion(&self) -> usize {
        self.selected_suggestion
    }

    pub fn select_next_suggestion(&mut self) {
        let count = self.latest_suggestions().map_or(0, |s| s.len());
        if self.selected_suggestion + 1 < count {
            self.selected_suggestion += 1;
        }
    }

    pub fn select_previous_suggestion(&mut self) {
        self.selected_suggestion = self.selected_suggestion.saturating_sub(1);
    }

    pub fn choose_suggestion(&mut self, now: Instant) -> bool {
        let choice = self
            .latest_suggestions()
            .and_then(|actions| actions.get(self.selected_suggestion))
            .cloned();
        match choice {
            Some(action) => self.send(&action, now),
            None => false,
        }
    }

    /// Deliver the welcome message and any replies that are due
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.welcome.fire_if_due(now) {
            let welcome = self.config.welcome_message.clone();
            changed |= self.send(&welcome, now);
        }

        while self.pending.front().is_some_and(|reply| reply.due <= now) {
            let Some(reply) = self.pending.pop_front() else {
                break;
            };
            self.entries.push(BotEntry::Message {
                author: Author::Bot,
                text: reply.text,
                at: Local::now(),
            });
            if let Some(actions) = reply.suggestions {
                self.entries.push(BotEntry::Suggestions(actions));
                self.selected_suggestion = 0;
            }
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn bot() -> Chatbot {
        Chatbot::with_rng(ChatbotConfig::default(), StdRng::seed_from_u64(7))
    }

    fn last_text(bot: &Chatbot) -> Option<(Author, String)> {
        bot.entries().iter().rev().find_map(|entry| match entry {
            BotEntry::Message { author, text, .. } => Some((*author, text.clone())),
            BotEntry::Suggestions(_) => None,
        })
    }

    #[test]
    fn test_classify_topics() {
        assert_eq!(Topic::classify("Hello!"), Topic::Greeting);
        assert_eq!(Topic::classify("Tell me about PREMIUM"), Topic::Premium);
        assert_eq!(Topic::classify("is it safe"), Topic::Safety);
        assert_eq!(Topic::classify("how do I register"), Topic::Account);
        assert_eq!(Topic::classify("pricing?"), Topic::Other);
        assert_eq!(Topic::classify("subscribe now"), Topic::Premium);
        // Greeting keywords are checked first, as substrings
        assert_eq!(Topic::classify("membership"), Topic::Greeting);
    }

    #[test]
    fn test_reply_arrives_after_typing_delay() {
        let start = Instant::now();
        let mut bot = bot();
        assert!(bot.send("is my data secure and safe?", start));
        assert!(bot.is_typing());

        assert!(!bot.tick(start + ms(999)));
        assert!(bot.tick(start + ms(1000)));
        assert!(!bot.is_typing());

        let (author, text) = last_text(&bot).unwrap();
        assert_eq!(author, Author::Bot);
        assert_eq!(text, SAFETY[0]);
    }

    #[test]
    fn test_random_reply_comes_from_topic() {
        let start = Instant::now();
        let mut bot = bot();
        for _ in 0..5 {
            bot.send("hey", start);
        }
        bot.tick(start + ms(1000));
        let replies: Vec<_> = bot
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                BotEntry::Message { author: Author::Bot, text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(replies.len(), 5);
        assert!(replies.iter().all(|r| GREETINGS.contains(r)));
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut bot = bot();
        assert!(!bot.send("   ", Instant::now()));
        assert!(bot.entries().is_empty());
    }

    #[test]
    fn test_welcome_on_first_open() {
        let start = Instant::now();
        let mut bot = bot();
        assert!(bot.has_unread_badge());

        bot.toggle(start);
        assert!(bot.is_open());
        assert!(!bot.has_unread_badge());

        bot.tick(start + ms(500));
        assert_eq!(last_text(&bot), Some((Author::User, "Hi! 👋".to_string())));

        bot.tick(start + ms(1500));
        assert_eq!(last_text(&bot).map(|(a, _)| a), Some(Author::Bot));

        // Reopening a non-empty conversation schedules nothing
        bot.toggle(start + ms(2000));
        bot.toggle(start + ms(2000));
        bot.tick(start + ms(5000));
        assert_eq!(bot.entries().len(), 2);
    }

    #[test]
    fn test_premium_suggestions_and_choice() {
        let start = Instant::now();
        let mut bot = bot();
        bot.send("premium please", start);
        assert!(bot.latest_suggestions().is_none());

        bot.tick(start + ms(1000));
        let suggestions = bot.latest_suggestions().unwrap().to_vec();
        assert_eq!(suggestions, PREMIUM_ACTIONS);

        bot.select_next_suggestion();
        bot.select_next_suggestion();
        bot.select_next_suggestion();
        assert_eq!(bot.selected_suggestion(), 2);

        assert!(bot.submit(start + ms(1100)));
        assert_eq!(
            last_text(&bot),
            Some((Author::User, "Start Free Trial".to_string()))
        );
    }

    #[test]
    fn test_account_suggestions() {
        assert_eq!(suggested_actions("My Account"), Some(ACCOUNT_ACTIONS));
        assert_eq!(suggested_actions("hello"), None);
    }

    #[test]
    fn test_premium_suggestions_win_over_account() {
        let message = "Is premium tied to my account?";
        assert_eq!(suggested_actions(message), Some(PREMIUM_ACTIONS));

        let start = Instant::now();
        let mut bot = bot();
        bot.send(message, start);
        bot.tick(start + ms(1000));
        let suggestions = bot.latest_suggestions().unwrap().to_vec();
        assert_eq!(suggestions, PREMIUM_ACTIONS);
    }

    #[test]
    fn test_submit_sends_input() {
        let start = Instant::now();
        let mut bot = bot();
        "hello".chars().for_each(|c| bot.input.insert(c));
        assert!(bot.submit(start));
        assert_eq!(bot.input.value(), "");
        assert!(!bot.submit(start));
    }
}
