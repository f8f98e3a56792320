//! Component assembly.
//!
//! An item is built from a [`ComponentPlan`]: an ordered list of component
//! constructors. Each constructor reads the anchors published so far, and
//! each component is drawn onto one shared surface, clipped against its
//! parent when it has one.

mod assembler;
mod attach;
mod component;
mod curve;
mod sampler;

pub use assembler::{assemble, ComponentPlan, Item, ItemData, ItemKind, ItemName, BROKEN_ITEM_NAME};
pub use attach::{Anchor, AttachmentPoint, AttachmentRecorder, Attachments};
pub use component::{Component, Part, TaperAnchors, TaperedPart};
pub use curve::CurveAccumulator;
pub use sampler::{Choice, ParameterSampler};
