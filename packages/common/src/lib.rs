pub mod category;
pub mod countries;
pub mod flag_reason;
pub mod moderation_status;
pub mod video_link;

pub use category::{Category, UnknownCategory};
pub use countries::Country;
pub use flag_reason::FlagReason;
pub use moderation_status::{Decision, InvalidTransition, ModerationStatus};
pub use video_link::{LinkResolver, ThumbnailQuality, VideoId, YouTubeResolver};
