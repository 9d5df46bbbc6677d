//! Model persistence: serialise/deserialise a [`Model`] to JSON. A thin
//! document wrapper rather than `impl Serialize` directly on `Model`, so
//! the on-disk shape can evolve independently of the in-memory validated
//! type.

use serde::{Deserialize, Serialize};

use crate::error::FrameResult;
use crate::loads::Load;
use crate::model::Model;
use crate::elements::{Joint, Member};

/// The on-disk representation of a [`Model`]: the same three
/// collections, but without the validation `Model::new` performs on
/// construction - a document read from disk is only as trustworthy as
/// its source, so it is re-validated through `Model::new` on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDocument {
    pub nodes: std::vec::Vec<Joint>,
    pub members: std::vec::Vec<Member>,
    pub loads: std::vec::Vec<Load>,
}

impl ModelDocument {
    pub fn from_model(model: &Model) -> Self {
        Self {
            nodes: model.joints.clone(),
            members: model.members.clone(),
            loads: model.loads.clone(),
        }
    }

    /// Re-validate and build a [`Model`] from this document.
    pub fn into_model(self) -> FrameResult<Model> {
        Model::new(self.nodes, self.members, self.loads)
    }
}

/// Serialise a model to a JSON string.
pub fn to_json(model: &Model) -> FrameResult<String> {
    let doc = ModelDocument::from_model(model);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse and re-validate a model from a JSON string.
pub fn from_json(json: &str) -> FrameResult<Model> {
    let doc: ModelDocument = serde_json::from_str(json)?;
    doc.into_model()
}
