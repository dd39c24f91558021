//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operations::Ec2Operation;
use crate::output::CreateVolumeOutput;
use crate::request::Ec2Request;
use crate::shape::{Member, Shape, render};
use crate::types::{TagSpecification, VolumeType};

/// EC2 CreateVolumeInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateVolumeInput {
    /// The Availability Zone in which to create the volume.
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "OutpostArn", skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    /// The size of the volume, in GiBs.
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// The volume type.
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(rename = "MultiAttachEnabled", skip_serializing_if = "Option::is_none")]
    pub multi_attach_enabled: Option<bool>,
}

impl CreateVolumeInput {
    /// Returns the `AvailabilityZone` member.
    #[must_use]
    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// Sets the `AvailabilityZone` member, replacing any previous value.
    pub fn set_availability_zone(&mut self, availability_zone: Option<String>) {
        self.availability_zone = availability_zone;
    }

    /// Sets the `AvailabilityZone` member and returns the updated value.
    #[must_use]
    pub fn with_availability_zone(mut self, availability_zone: impl Into<String>) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }

    /// Returns the `Encrypted` member.
    #[must_use]
    pub fn encrypted(&self) -> Option<bool> {
        self.encrypted
    }

    /// Sets the `Encrypted` member, replacing any previous value.
    pub fn set_encrypted(&mut self, encrypted: Option<bool>) {
        self.encrypted = encrypted;
    }

    /// Sets the `Encrypted` member and returns the updated value.
    #[must_use]
    pub fn with_encrypted(mut self, encrypted: impl Into<bool>) -> Self {
        self.encrypted = Some(encrypted.into());
        self
    }

    /// Returns the `Iops` member.
    #[must_use]
    pub fn iops(&self) -> Option<i32> {
        self.iops
    }

    /// Sets the `Iops` member, replacing any previous value.
    pub fn set_iops(&mut self, iops: Option<i32>) {
        self.iops = iops;
    }

    /// Sets the `Iops` member and returns the updated value.
    #[must_use]
    pub fn with_iops(mut self, iops: impl Into<i32>) -> Self {
        self.iops = Some(iops.into());
        self
    }

    /// Returns the `KmsKeyId` member.
    #[must_use]
    pub fn kms_key_id(&self) -> Option<&str> {
        self.kms_key_id.as_deref()
    }

    /// Sets the `KmsKeyId` member, replacing any previous value.
    pub fn set_kms_key_id(&mut self, kms_key_id: Option<String>) {
        self.kms_key_id = kms_key_id;
    }

    /// Sets the `KmsKeyId` member and returns the updated value.
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Returns the `OutpostArn` member.
    #[must_use]
    pub fn outpost_arn(&self) -> Option<&str> {
        self.outpost_arn.as_deref()
    }

    /// Sets the `OutpostArn` member, replacing any previous value.
    pub fn set_outpost_arn(&mut self, outpost_arn: Option<String>) {
        self.outpost_arn = outpost_arn;
    }

    /// Sets the `OutpostArn` member and returns the updated value.
    #[must_use]
    pub fn with_outpost_arn(mut self, outpost_arn: impl Into<String>) -> Self {
        self.outpost_arn = Some(outpost_arn.into());
        self
    }

    /// Returns the `Size` member.
    #[must_use]
    pub fn size(&self) -> Option<i32> {
        self.size
    }

    /// Sets the `Size` member, replacing any previous value.
    pub fn set_size(&mut self, size: Option<i32>) {
        self.size = size;
    }

    /// Sets the `Size` member and returns the updated value.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<i32>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Returns the `SnapshotId` member.
    #[must_use]
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// Sets the `SnapshotId` member, replacing any previous value.
    pub fn set_snapshot_id(&mut self, snapshot_id: Option<String>) {
        self.snapshot_id = snapshot_id;
    }

    /// Sets the `SnapshotId` member and returns the updated value.
    #[must_use]
    pub fn with_snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    /// Returns the `VolumeType` member.
    #[must_use]
    pub fn volume_type(&self) -> Option<&VolumeType> {
        self.volume_type.as_ref()
    }

    /// Sets the `VolumeType` member, replacing any previous value.
    pub fn set_volume_type(&mut self, volume_type: Option<VolumeType>) {
        self.volume_type = volume_type;
    }

    /// Sets the `VolumeType` member and returns the updated value.
    #[must_use]
    pub fn with_volume_type(mut self, volume_type: impl Into<VolumeType>) -> Self {
        self.volume_type = Some(volume_type.into());
        self
    }

    /// Returns the `DryRun` member.
    #[must_use]
    pub fn dry_run(&self) -> Option<bool> {
        self.dry_run
    }

    /// Sets the `DryRun` member, replacing any previous value.
    pub fn set_dry_run(&mut self, dry_run: Option<bool>) {
        self.dry_run = dry_run;
    }

    /// Sets the `DryRun` member and returns the updated value.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: impl Into<bool>) -> Self {
        self.dry_run = Some(dry_run.into());
        self
    }

    /// Returns the `TagSpecifications` member.
    #[must_use]
    pub fn tag_specifications(&self) -> Option<&[TagSpecification]> {
        self.tag_specifications.as_deref()
    }

    /// Sets the `TagSpecifications` member, replacing any previous value.
    pub fn set_tag_specifications(&mut self, tag_specifications: Option<Vec<TagSpecification>>) {
        self.tag_specifications = tag_specifications;
    }

    /// Appends to the `TagSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_tag_specifications(
        mut self,
        tag_specifications: impl IntoIterator<Item = impl Into<TagSpecification>>,
    ) -> Self {
        self.tag_specifications
            .get_or_insert_with(Vec::new)
            .extend(tag_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `MultiAttachEnabled` member.
    #[must_use]
    pub fn multi_attach_enabled(&self) -> Option<bool> {
        self.multi_attach_enabled
    }

    /// Sets the `MultiAttachEnabled` member, replacing any previous value.
    pub fn set_multi_attach_enabled(&mut self, multi_attach_enabled: Option<bool>) {
        self.multi_attach_enabled = multi_attach_enabled;
    }

    /// Sets the `MultiAttachEnabled` member and returns the updated value.
    #[must_use]
    pub fn with_multi_attach_enabled(mut self, multi_attach_enabled: impl Into<bool>) -> Self {
        self.multi_attach_enabled = Some(multi_attach_enabled.into());
        self
    }
}

impl Shape for CreateVolumeInput {
    const SHAPE_NAME: &'static str = "CreateVolumeRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", true, self.availability_zone.as_ref()),
            Member::new("Encrypted", false, self.encrypted.as_ref()),
            Member::new("Iops", false, self.iops.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("OutpostArn", false, self.outpost_arn.as_ref()),
            Member::new("Size", false, self.size.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("VolumeType", false, self.volume_type.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
            Member::new("MultiAttachEnabled", false, self.multi_attach_enabled.as_ref()),
        ]
    }
}

impl fmt::Display for CreateVolumeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for CreateVolumeInput {
    type Output = CreateVolumeOutput;

    const OPERATION: Ec2Operation = Ec2Operation::CreateVolume;
}

