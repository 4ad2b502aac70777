//! Interview form core: fields, validation schema, and the controller that
//! ties them to a host notification.

pub mod controller;
pub mod field;
pub mod notification;
pub mod record;
pub mod validation;

pub use controller::{FormController, SubmitOutcome, ValidationMode, DEFAULT_NOTIFICATION_TITLE};
pub use field::Field;
pub use notification::{Notification, NotificationLog, Notifier};
pub use record::{FormRecord, FormValues};
pub use validation::{FieldSchema, FieldValidationError, Rule, ValidationErrors, ValidationSchema};
