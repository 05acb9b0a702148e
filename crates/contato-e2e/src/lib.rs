//! End-to-end harness for the TechShop contact form.
//!
//! Drives one hosted HTML contact form through a real Chromium instance:
//! field entry, submission, client-side required-field validation, and
//! payload assertions. The form is exercised two ways: direct DOM
//! interaction, and natural-language instructions handed to an AI action
//! executor. Both modes share one assertion protocol.
//!
//! The form declares `action="#"`, so a submit may surface as a network
//! POST, a full navigation/reload, or nothing at all depending on the
//! page's script state. The harness races both signal sources under a
//! bounded deadline and asserts on whichever branch actually occurs; see
//! [`submission::SubmissionObservation`].
//!
//! Browser control requires the `browser` feature (chromiumoxide). The
//! pure layers (form schema, test data, payload decoding, the
//! instruction grammar) compile and test without it.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod form;
pub mod instruction;
pub mod result;
pub mod submission;
pub mod testdata;

#[cfg(feature = "browser")]
pub mod ai;
#[cfg(feature = "browser")]
pub mod browser;
#[cfg(feature = "browser")]
pub mod driver;
#[cfg(feature = "browser")]
pub mod observer;
#[cfg(feature = "browser")]
pub mod page;
#[cfg(feature = "browser")]
pub mod scenario;

pub use config::HarnessConfig;
pub use form::{FormField, FormFields};
pub use result::{ContatoError, ContatoResult};
pub use submission::{CapturedPost, NavigationEvent, PayloadKind, SubmissionObservation};

#[cfg(feature = "browser")]
pub use ai::{AiContext, AiExecutor, ScriptedExecutor};
#[cfg(feature = "browser")]
pub use browser::{Browser, PageHandle};
#[cfg(feature = "browser")]
pub use driver::{DirectDriver, FormDriver, InstructionDriver};
#[cfg(feature = "browser")]
pub use observer::SubmissionObserver;
#[cfg(feature = "browser")]
pub use page::ContactPage;
#[cfg(feature = "browser")]
pub use scenario::ScenarioRunner;
