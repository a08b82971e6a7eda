/*!
 * # docinject
 *
 * A build-time tool that copies documentation files into the demo pages
 * that display them.
 *
 * For every locale (by default `zh` and `en`) it lists the Markdown files
 * under `docs/<locale>/`, finds the page with the same name under
 * `demos/<locale>/`, and replaces that page's
 * `<script type="text/plain" id="mdContent">...</script>` block with the
 * document's text. Documents without a page are skipped; pages without a
 * marker block are left unchanged.
 *
 * ## Architecture
 *
 * - `app_config`: Configuration loading and validation
 * - `locale`: Locale codes and their directory pairs
 * - `file_utils`: File system operations
 * - `marker`: Marker block matching and replacement
 * - `injector`: The scan-and-inject pass
 * - `errors`: Error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod injector;
pub mod locale;
pub mod marker;

// Re-export main types for easier usage
pub use app_config::{Config, LogLevel};
pub use errors::InjectError;
pub use injector::{ContentInjector, FileOutcome, LocaleOutcome, RunSummary};
pub use locale::{Locale, LocaleDirs};
pub use marker::MarkerBlock;
