//! Route handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Home listing, up to 100 posts |
//! | `GET`  | `/post/{slug}` | 404 on miss |
//! | `GET`  | `/about` | Static render |
//! | `POST` | `/contact` | Insert + best-effort mail, JSON confirmation |
//! | `POST` | `/uploader` | Admin; sanitized multipart file write |
//! | `GET`  | `/dashboard` | Admin; management listing |
//! | `GET`  | `/edit/{id}` | Admin; edit form, `0` means blank |
//! | `POST` | `/edit/{id}` | Admin; `0` creates, else full replace |
//! | `POST` | `/delete/{id}` | Admin; silent no-op on absent id |

pub mod admin;
pub mod contact;
pub mod public;
pub mod upload;

/// Maximum number of posts any listing fetches, matching the fixed fetch
/// limit of the public contract. There is no pagination beyond this.
pub const POST_FETCH_LIMIT: usize = 100;
