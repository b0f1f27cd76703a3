//! # feelone-core
//!
//! Core library for FeelOne - a demo emotion check-in app.
//!
//! This library provides:
//! - The session state machine that sequences the user through screens
//! - Screen-local state (prompt typewriter, entry box, forms)
//! - A deterministic timer scheduler for screen timers
//! - The canned emotion pool and prompt list
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Flow
//!
//! Auth → (dev notice) → input → analyzing → results, with results leading
//! back to input or over to the profile screen. Nothing is analyzed and
//! nothing is stored: results are drawn at random from a fixed pool.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use feelone_core::{Config, Controller, Intent, View};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = Config::default();
//! let mut controller = Controller::new(false, config.timing.clone(), StdRng::seed_from_u64(0));
//!
//! controller.dispatch(Intent::Login);
//! assert_eq!(controller.view(), View::Input);
//!
//! controller.advance(Duration::from_secs(5));
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use content::{prompt_for, select_random, EmotionRecord, EMOTIONS, PROMPTS};
pub use controller::{Controller, Intent, TimerKind};
pub use error::{Error, Result};
pub use screen::{EditKey, Screen};
pub use session::{Event, Identity, Session, View};

// Public modules
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod logging;
pub mod screen;
pub mod session;
pub mod timer;
pub mod validation;
