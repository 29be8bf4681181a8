pub mod document;
mod lenient;
pub mod navigation;
pub mod repository;
pub mod slices;

pub use document::{Document, SearchPage};
pub use navigation::{LinkField, NavigationData, NavigationLink, RichTextNode};
pub use repository::{Ref, RepositoryInfo};
pub use slices::{Slice, SliceZone};
