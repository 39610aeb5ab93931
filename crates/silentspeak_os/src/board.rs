#![forbid(unsafe_code)]

use std::fmt;

use silentspeak_contracts::config::{DemoMessageSeed, UiConfig};
use silentspeak_contracts::message::{Message, MessageId, ModerationFlags, DEFAULT_TOPIC};
use silentspeak_contracts::risk::RiskLevel;
use silentspeak_contracts::{ContractViolation, MonotonicTimeNs, ReasonCodeId, Validate};
use silentspeak_engines::risk::RiskClassifier;

pub mod reason_codes {
    use silentspeak_contracts::ReasonCodeId;

    // Message board reason-code namespace.
    pub const BOARD_TEXT_EMPTY: ReasonCodeId = ReasonCodeId(0x4D42_00F1);
    pub const BOARD_TEXT_TOO_LONG: ReasonCodeId = ReasonCodeId(0x4D42_00F2);
    pub const BOARD_MESSAGE_NOT_FOUND: ReasonCodeId = ReasonCodeId(0x4D42_00F3);
    pub const BOARD_CONTRACT_VIOLATION: ReasonCodeId = ReasonCodeId(0x4D42_00F4);
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    TextEmpty,
    TextTooLong { max_chars: usize, got: usize },
    MessageNotFound(MessageId),
    ContractViolation(ContractViolation),
}

impl BoardError {
    pub fn reason_code(&self) -> ReasonCodeId {
        match self {
            BoardError::TextEmpty => reason_codes::BOARD_TEXT_EMPTY,
            BoardError::TextTooLong { .. } => reason_codes::BOARD_TEXT_TOO_LONG,
            BoardError::MessageNotFound(_) => reason_codes::BOARD_MESSAGE_NOT_FOUND,
            BoardError::ContractViolation(_) => reason_codes::BOARD_CONTRACT_VIOLATION,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextEmpty => write!(f, "message text is empty"),
            Self::TextTooLong { max_chars, got } => {
                write!(f, "message is {got} characters, limit is {max_chars}")
            }
            Self::MessageNotFound(id) => write!(f, "no message with id {}", id.0),
            Self::ContractViolation(v) => write!(f, "contract violation: {v}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<ContractViolation> for BoardError {
    fn from(v: ContractViolation) -> Self {
        BoardError::ContractViolation(v)
    }
}

/// Seam between the board and whatever assigns risk tiers.
pub trait RiskAssessor {
    fn assess_risk(&self, text: &str) -> RiskLevel;
}

impl RiskAssessor for RiskClassifier {
    fn assess_risk(&self, text: &str) -> RiskLevel {
        self.classify(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    pub max_message_length: usize,
    pub avg_response_minutes_per_item: f64,
}

impl BoardConfig {
    pub fn mvp_v1() -> Self {
        Self::from_ui(&UiConfig::default())
    }

    pub fn from_ui(ui: &UiConfig) -> Self {
        Self {
            max_message_length: ui.max_message_length,
            avg_response_minutes_per_item: ui.avg_response_minutes_per_item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub text: String,
    pub author: String,
    pub topic: Option<String>,
    pub urgent: bool,
    pub request_facilitator: bool,
    pub now: MonotonicTimeNs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    Submit(NewMessage),
    Approve(MessageId),
    MarkReviewed(MessageId),
    RemoveFromQueue(MessageId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Submitted {
        id: MessageId,
        risk: RiskLevel,
        queued: bool,
    },
    Approved(MessageId),
    Reviewed(MessageId),
    RemovedFromQueue(MessageId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFilter {
    All,
    Only(RiskLevel),
}

impl RiskFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(RiskFilter::All);
        }
        RiskLevel::parse(raw).map(RiskFilter::Only)
    }

    fn admits(self, risk: RiskLevel) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Only(wanted) => wanted == risk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub queued: usize,
    pub high_risk: usize,
    pub reviewed: usize,
    pub avg_response: String,
}

/// Immutable view of every message, newest submission first. Transitions
/// produce a new snapshot; nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId(1),
        }
    }

    /// Seeds keep their listed order and get ids `1..=n`.
    pub fn seeded<A>(
        seeds: &[DemoMessageSeed],
        assessor: &A,
        now: MonotonicTimeNs,
    ) -> Result<Self, ContractViolation>
    where
        A: RiskAssessor + ?Sized,
    {
        let mut messages = Vec::with_capacity(seeds.len());
        for (idx, seed) in seeds.iter().enumerate() {
            seed.validate()?;
            messages.push(Message::v1(
                MessageId(idx as u64 + 1),
                seed.text.clone(),
                seed.author.clone(),
                now.minus_minutes(seed.minutes_ago),
                seed.topic.clone(),
                assessor.assess_risk(&seed.text),
                ModerationFlags {
                    urgent: seed.urgent,
                    queued: seed.queued,
                    reviewed: seed.reviewed,
                    approved: seed.approved,
                },
            )?);
        }
        Ok(Self {
            next_id: MessageId(messages.len() as u64 + 1),
            messages,
        })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn next_id(&self) -> MessageId {
        self.next_id
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Approved messages, most recent timestamp first.
    pub fn participant_feed(&self) -> Vec<&Message> {
        let mut feed: Vec<&Message> = self.messages.iter().filter(|m| m.flags.approved).collect();
        feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        feed
    }

    pub fn queue(&self) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.flags.queued).collect()
    }

    pub fn filter_by_risk(&self, filter: RiskFilter) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| filter.admits(m.risk()))
            .collect()
    }

    pub fn stats(&self, avg_response_minutes_per_item: f64) -> BoardStats {
        let queued = self.messages.iter().filter(|m| m.flags.queued).count();
        let avg_response = if queued > 0 {
            let minutes = (queued as f64 * avg_response_minutes_per_item).round().max(1.0);
            format!("{}m", minutes as u64)
        } else {
            "2m".to_string()
        };
        BoardStats {
            total: self.messages.len(),
            queued,
            high_risk: self
                .messages
                .iter()
                .filter(|m| m.risk() == RiskLevel::High)
                .count(),
            reviewed: self.messages.iter().filter(|m| m.flags.reviewed).count(),
            avg_response,
        }
    }

    fn replace_flags(
        &self,
        id: MessageId,
        update: impl Fn(ModerationFlags) -> ModerationFlags,
    ) -> Result<Self, BoardError> {
        let idx = self
            .messages
            .iter()
            .position(|m| m.id == id)
            .ok_or(BoardError::MessageNotFound(id))?;
        let mut messages = self.messages.clone();
        let updated = messages[idx].with_flags(update(messages[idx].flags));
        messages[idx] = updated;
        Ok(Self {
            messages,
            next_id: self.next_id,
        })
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTransition {
    pub snapshot: BoardSnapshot,
    pub event: BoardEvent,
}

#[derive(Debug, Clone)]
pub struct MessageBoardWiring<A>
where
    A: RiskAssessor,
{
    config: BoardConfig,
    assessor: A,
}

impl<A> MessageBoardWiring<A>
where
    A: RiskAssessor,
{
    pub fn new(config: BoardConfig, assessor: A) -> Result<Self, ContractViolation> {
        if config.max_message_length == 0 {
            return Err(ContractViolation::InvalidValue {
                field: "board_config.max_message_length",
                reason: "must be > 0",
            });
        }
        if !config.avg_response_minutes_per_item.is_finite() {
            return Err(ContractViolation::NotFinite {
                field: "board_config.avg_response_minutes_per_item",
            });
        }
        Ok(Self { config, assessor })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn assessor(&self) -> &A {
        &self.assessor
    }

    pub fn seed(
        &self,
        seeds: &[DemoMessageSeed],
        now: MonotonicTimeNs,
    ) -> Result<BoardSnapshot, ContractViolation> {
        BoardSnapshot::seeded(seeds, &self.assessor, now)
    }

    pub fn stats(&self, snapshot: &BoardSnapshot) -> BoardStats {
        snapshot.stats(self.config.avg_response_minutes_per_item)
    }

    /// Pure transition: `snapshot` is left untouched whether or not the
    /// action succeeds.
    pub fn apply(
        &self,
        snapshot: &BoardSnapshot,
        action: BoardAction,
    ) -> Result<BoardTransition, BoardError> {
        match action {
            BoardAction::Submit(new) => self.submit(snapshot, new),
            BoardAction::Approve(id) => {
                let next = snapshot.replace_flags(id, |f| ModerationFlags {
                    approved: true,
                    queued: false,
                    reviewed: true,
                    ..f
                })?;
                tracing::info!(message_id = id.0, "message approved");
                Ok(BoardTransition {
                    snapshot: next,
                    event: BoardEvent::Approved(id),
                })
            }
            BoardAction::MarkReviewed(id) => {
                let next = snapshot.replace_flags(id, |f| ModerationFlags {
                    reviewed: true,
                    queued: false,
                    ..f
                })?;
                tracing::info!(message_id = id.0, "message marked reviewed");
                Ok(BoardTransition {
                    snapshot: next,
                    event: BoardEvent::Reviewed(id),
                })
            }
            BoardAction::RemoveFromQueue(id) => {
                let next = snapshot.replace_flags(id, |f| ModerationFlags { queued: false, ..f })?;
                tracing::info!(message_id = id.0, "message removed from queue");
                Ok(BoardTransition {
                    snapshot: next,
                    event: BoardEvent::RemovedFromQueue(id),
                })
            }
        }
    }

    fn submit(
        &self,
        snapshot: &BoardSnapshot,
        new: NewMessage,
    ) -> Result<BoardTransition, BoardError> {
        let text = new.text.trim();
        if text.is_empty() {
            return Err(BoardError::TextEmpty);
        }
        let chars = text.chars().count();
        if chars > self.config.max_message_length {
            return Err(BoardError::TextTooLong {
                max_chars: self.config.max_message_length,
                got: chars,
            });
        }

        let risk = self.assessor.assess_risk(text);
        let queued = new.urgent || new.request_facilitator || risk == RiskLevel::High;
        let topic = new
            .topic
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TOPIC.to_string());

        let id = snapshot.next_id;
        let message = Message::v1(
            id,
            text.to_string(),
            new.author,
            new.now,
            topic,
            risk,
            ModerationFlags {
                urgent: new.urgent,
                queued,
                reviewed: false,
                approved: risk == RiskLevel::Low,
            },
        )?;

        let mut messages = Vec::with_capacity(snapshot.messages.len() + 1);
        messages.push(message);
        messages.extend(snapshot.messages.iter().cloned());

        tracing::info!(
            message_id = id.0,
            risk = risk.as_str(),
            queued,
            "message submitted"
        );
        Ok(BoardTransition {
            snapshot: BoardSnapshot {
                messages,
                next_id: MessageId(id.0 + 1),
            },
            event: BoardEvent::Submitted { id, risk, queued },
        })
    }
}
