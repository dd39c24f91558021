//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Member, Shape, render};
use crate::types::{FpgaImage, Image, ImportImageLicenseConfigurationResponse, SnapshotDetail, Tag};

/// EC2 DescribeFpgaImagesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeFpgaImagesOutput {
    /// Information about the FPGA images.
    #[serde(rename = "FpgaImages", skip_serializing_if = "Option::is_none")]
    pub fpga_images: Option<Vec<FpgaImage>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeFpgaImagesOutput {
    /// Returns the `FpgaImages` member.
    #[must_use]
    pub fn fpga_images(&self) -> Option<&[FpgaImage]> {
        self.fpga_images.as_deref()
    }

    /// Sets the `FpgaImages` member, replacing any previous value.
    pub fn set_fpga_images(&mut self, fpga_images: Option<Vec<FpgaImage>>) {
        self.fpga_images = fpga_images;
    }

    /// Appends to the `FpgaImages` member and returns the updated value.
    #[must_use]
    pub fn with_fpga_images(
        mut self,
        fpga_images: impl IntoIterator<Item = impl Into<FpgaImage>>,
    ) -> Self {
        self.fpga_images
            .get_or_insert_with(Vec::new)
            .extend(fpga_images.into_iter().map(Into::into));
        self
    }

    /// Returns the `NextToken` member.
    #[must_use]
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    /// Sets the `NextToken` member, replacing any previous value.
    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    /// Sets the `NextToken` member and returns the updated value.
    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl Shape for DescribeFpgaImagesOutput {
    const SHAPE_NAME: &'static str = "DescribeFpgaImagesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("FpgaImages", false, self.fpga_images.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeFpgaImagesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeImagesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeImagesOutput {
    /// Information about the images.
    #[serde(rename = "Images", skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
}

impl DescribeImagesOutput {
    /// Returns the `Images` member.
    #[must_use]
    pub fn images(&self) -> Option<&[Image]> {
        self.images.as_deref()
    }

    /// Sets the `Images` member, replacing any previous value.
    pub fn set_images(&mut self, images: Option<Vec<Image>>) {
        self.images = images;
    }

    /// Appends to the `Images` member and returns the updated value.
    #[must_use]
    pub fn with_images(mut self, images: impl IntoIterator<Item = impl Into<Image>>) -> Self {
        self.images
            .get_or_insert_with(Vec::new)
            .extend(images.into_iter().map(Into::into));
        self
    }
}

impl Shape for DescribeImagesOutput {
    const SHAPE_NAME: &'static str = "DescribeImagesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Images", false, self.images.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeImagesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ImportImageOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportImageOutput {
    #[serde(rename = "Architecture", skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// The task ID of the import image task.
    #[serde(rename = "ImportTaskId", skip_serializing_if = "Option::is_none")]
    pub import_task_id: Option<String>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "LicenseType", skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(rename = "Progress", skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    #[serde(rename = "SnapshotDetails", skip_serializing_if = "Option::is_none")]
    pub snapshot_details: Option<Vec<SnapshotDetail>>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(rename = "LicenseSpecifications", skip_serializing_if = "Option::is_none")]
    pub license_specifications: Option<Vec<ImportImageLicenseConfigurationResponse>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ImportImageOutput {
    /// Returns the `Architecture` member.
    #[must_use]
    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    /// Sets the `Architecture` member, replacing any previous value.
    pub fn set_architecture(&mut self, architecture: Option<String>) {
        self.architecture = architecture;
    }

    /// Sets the `Architecture` member and returns the updated value.
    #[must_use]
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// Returns the `Description` member.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the `Description` member, replacing any previous value.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Sets the `Description` member and returns the updated value.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
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

    /// Returns the `Hypervisor` member.
    #[must_use]
    pub fn hypervisor(&self) -> Option<&str> {
        self.hypervisor.as_deref()
    }

    /// Sets the `Hypervisor` member, replacing any previous value.
    pub fn set_hypervisor(&mut self, hypervisor: Option<String>) {
        self.hypervisor = hypervisor;
    }

    /// Sets the `Hypervisor` member and returns the updated value.
    #[must_use]
    pub fn with_hypervisor(mut self, hypervisor: impl Into<String>) -> Self {
        self.hypervisor = Some(hypervisor.into());
        self
    }

    /// Returns the `ImageId` member.
    #[must_use]
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// Sets the `ImageId` member, replacing any previous value.
    pub fn set_image_id(&mut self, image_id: Option<String>) {
        self.image_id = image_id;
    }

    /// Sets the `ImageId` member and returns the updated value.
    #[must_use]
    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    /// Returns the `ImportTaskId` member.
    #[must_use]
    pub fn import_task_id(&self) -> Option<&str> {
        self.import_task_id.as_deref()
    }

    /// Sets the `ImportTaskId` member, replacing any previous value.
    pub fn set_import_task_id(&mut self, import_task_id: Option<String>) {
        self.import_task_id = import_task_id;
    }

    /// Sets the `ImportTaskId` member and returns the updated value.
    #[must_use]
    pub fn with_import_task_id(mut self, import_task_id: impl Into<String>) -> Self {
        self.import_task_id = Some(import_task_id.into());
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

    /// Returns the `LicenseType` member.
    #[must_use]
    pub fn license_type(&self) -> Option<&str> {
        self.license_type.as_deref()
    }

    /// Sets the `LicenseType` member, replacing any previous value.
    pub fn set_license_type(&mut self, license_type: Option<String>) {
        self.license_type = license_type;
    }

    /// Sets the `LicenseType` member and returns the updated value.
    #[must_use]
    pub fn with_license_type(mut self, license_type: impl Into<String>) -> Self {
        self.license_type = Some(license_type.into());
        self
    }

    /// Returns the `Platform` member.
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Sets the `Platform` member, replacing any previous value.
    pub fn set_platform(&mut self, platform: Option<String>) {
        self.platform = platform;
    }

    /// Sets the `Platform` member and returns the updated value.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Returns the `Progress` member.
    #[must_use]
    pub fn progress(&self) -> Option<&str> {
        self.progress.as_deref()
    }

    /// Sets the `Progress` member, replacing any previous value.
    pub fn set_progress(&mut self, progress: Option<String>) {
        self.progress = progress;
    }

    /// Sets the `Progress` member and returns the updated value.
    #[must_use]
    pub fn with_progress(mut self, progress: impl Into<String>) -> Self {
        self.progress = Some(progress.into());
        self
    }

    /// Returns the `SnapshotDetails` member.
    #[must_use]
    pub fn snapshot_details(&self) -> Option<&[SnapshotDetail]> {
        self.snapshot_details.as_deref()
    }

    /// Sets the `SnapshotDetails` member, replacing any previous value.
    pub fn set_snapshot_details(&mut self, snapshot_details: Option<Vec<SnapshotDetail>>) {
        self.snapshot_details = snapshot_details;
    }

    /// Appends to the `SnapshotDetails` member and returns the updated value.
    #[must_use]
    pub fn with_snapshot_details(
        mut self,
        snapshot_details: impl IntoIterator<Item = impl Into<SnapshotDetail>>,
    ) -> Self {
        self.snapshot_details
            .get_or_insert_with(Vec::new)
            .extend(snapshot_details.into_iter().map(Into::into));
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the `StatusMessage` member.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Sets the `StatusMessage` member, replacing any previous value.
    pub fn set_status_message(&mut self, status_message: Option<String>) {
        self.status_message = status_message;
    }

    /// Sets the `StatusMessage` member and returns the updated value.
    #[must_use]
    pub fn with_status_message(mut self, status_message: impl Into<String>) -> Self {
        self.status_message = Some(status_message.into());
        self
    }

    /// Returns the `LicenseSpecifications` member.
    #[must_use]
    pub fn license_specifications(&self) -> Option<&[ImportImageLicenseConfigurationResponse]> {
        self.license_specifications.as_deref()
    }

    /// Sets the `LicenseSpecifications` member, replacing any previous value.
    pub fn set_license_specifications(
        &mut self,
        license_specifications: Option<Vec<ImportImageLicenseConfigurationResponse>>,
    ) {
        self.license_specifications = license_specifications;
    }

    /// Appends to the `LicenseSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_license_specifications(
        mut self,
        license_specifications: impl IntoIterator<Item = impl Into<ImportImageLicenseConfigurationResponse>>,
    ) -> Self {
        self.license_specifications
            .get_or_insert_with(Vec::new)
            .extend(license_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `Tags` member.
    #[must_use]
    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    /// Sets the `Tags` member, replacing any previous value.
    pub fn set_tags(&mut self, tags: Option<Vec<Tag>>) {
        self.tags = tags;
    }

    /// Appends to the `Tags` member and returns the updated value.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<Tag>>) -> Self {
        self.tags
            .get_or_insert_with(Vec::new)
            .extend(tags.into_iter().map(Into::into));
        self
    }
}

impl Shape for ImportImageOutput {
    const SHAPE_NAME: &'static str = "ImportImageResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Architecture", false, self.architecture.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("Encrypted", false, self.encrypted.as_ref()),
            Member::new("Hypervisor", false, self.hypervisor.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("ImportTaskId", false, self.import_task_id.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("LicenseType", false, self.license_type.as_ref()),
            Member::new("Platform", false, self.platform.as_ref()),
            Member::new("Progress", false, self.progress.as_ref()),
            Member::new("SnapshotDetails", false, self.snapshot_details.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("StatusMessage", false, self.status_message.as_ref()),
            Member::new("LicenseSpecifications", false, self.license_specifications.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for ImportImageOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

