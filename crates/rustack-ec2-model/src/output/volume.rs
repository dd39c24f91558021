//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Member, Shape, render};
use crate::types::Volume;

/// EC2 CreateVolumeOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateVolumeOutput {
    /// Information about the new volume.
    #[serde(rename = "Volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<Volume>,
}

impl CreateVolumeOutput {
    /// Returns the `Volume` member.
    #[must_use]
    pub fn volume(&self) -> Option<&Volume> {
        self.volume.as_ref()
    }

    /// Sets the `Volume` member, replacing any previous value.
    pub fn set_volume(&mut self, volume: Option<Volume>) {
        self.volume = volume;
    }

    /// Sets the `Volume` member and returns the updated value.
    #[must_use]
    pub fn with_volume(mut self, volume: impl Into<Volume>) -> Self {
        self.volume = Some(volume.into());
        self
    }
}

impl Shape for CreateVolumeOutput {
    const SHAPE_NAME: &'static str = "CreateVolumeResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Volume", false, self.volume.as_ref()),
        ]
    }
}

impl fmt::Display for CreateVolumeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

