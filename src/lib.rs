//! Tables of contents for folders of Markdown notes.
//!
//! [`toc::TocBuilder`] lists the `.md` files directly inside a folder and
//! renders them as a numbered list of `[[wiki links]]`, newest first. The
//! [`host`] module holds the seams an editor plugs into, and
//! [`host::CreateTocCommand`] ties them together.

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod ext;
pub mod host;
pub mod settings;
pub mod toc;
