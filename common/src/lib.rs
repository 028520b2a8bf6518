//! Nota Fiscal Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態遷移

pub mod api;
pub mod drop_zone;
pub mod error;
pub mod messages;
pub mod session;
pub mod status;
pub mod types;

pub use api::{ApiConfig, ApiFailure, HealthStatus, DEFAULT_API_BASE_URL, UPLOAD_FIELD_NAME};
pub use drop_zone::{accepted_files, first_accepted, is_pdf, DropZoneState};
pub use error::{Error, Result};
pub use session::{Clipboard, Rejected, SaveRequest, Session};
pub use status::{Action, Banner, BannerKind, UiStatus};
pub use types::{ExtractedData, FileCandidate, SelectedFile};
