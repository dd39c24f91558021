//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operations::Ec2Operation;
use crate::output::{DescribeFpgaImagesOutput, DescribeImagesOutput, ImportImageOutput};
use crate::request::Ec2Request;
use crate::shape::{Member, Shape, render};
use crate::types::{
    ClientData, Filter, ImageDiskContainer, ImportImageLicenseConfigurationRequest,
    TagSpecification,
};

/// EC2 DescribeFpgaImagesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeFpgaImagesInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// The AFI IDs.
    #[serde(rename = "FpgaImageIds", skip_serializing_if = "Option::is_none")]
    pub fpga_image_ids: Option<Vec<String>>,
    #[serde(rename = "Owners", skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeFpgaImagesInput {
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

    /// Returns the `FpgaImageIds` member.
    #[must_use]
    pub fn fpga_image_ids(&self) -> Option<&[String]> {
        self.fpga_image_ids.as_deref()
    }

    /// Sets the `FpgaImageIds` member, replacing any previous value.
    pub fn set_fpga_image_ids(&mut self, fpga_image_ids: Option<Vec<String>>) {
        self.fpga_image_ids = fpga_image_ids;
    }

    /// Appends to the `FpgaImageIds` member and returns the updated value.
    #[must_use]
    pub fn with_fpga_image_ids(
        mut self,
        fpga_image_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.fpga_image_ids
            .get_or_insert_with(Vec::new)
            .extend(fpga_image_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `Owners` member.
    #[must_use]
    pub fn owners(&self) -> Option<&[String]> {
        self.owners.as_deref()
    }

    /// Sets the `Owners` member, replacing any previous value.
    pub fn set_owners(&mut self, owners: Option<Vec<String>>) {
        self.owners = owners;
    }

    /// Appends to the `Owners` member and returns the updated value.
    #[must_use]
    pub fn with_owners(mut self, owners: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.owners
            .get_or_insert_with(Vec::new)
            .extend(owners.into_iter().map(Into::into));
        self
    }

    /// Returns the `Filters` member.
    #[must_use]
    pub fn filters(&self) -> Option<&[Filter]> {
        self.filters.as_deref()
    }

    /// Sets the `Filters` member, replacing any previous value.
    pub fn set_filters(&mut self, filters: Option<Vec<Filter>>) {
        self.filters = filters;
    }

    /// Appends to the `Filters` member and returns the updated value.
    #[must_use]
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = impl Into<Filter>>) -> Self {
        self.filters
            .get_or_insert_with(Vec::new)
            .extend(filters.into_iter().map(Into::into));
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

    /// Returns the `MaxResults` member.
    #[must_use]
    pub fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    /// Sets the `MaxResults` member, replacing any previous value.
    pub fn set_max_results(&mut self, max_results: Option<i32>) {
        self.max_results = max_results;
    }

    /// Sets the `MaxResults` member and returns the updated value.
    #[must_use]
    pub fn with_max_results(mut self, max_results: impl Into<i32>) -> Self {
        self.max_results = Some(max_results.into());
        self
    }
}

impl Shape for DescribeFpgaImagesInput {
    const SHAPE_NAME: &'static str = "DescribeFpgaImagesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("FpgaImageIds", false, self.fpga_image_ids.as_ref()),
            Member::new("Owners", false, self.owners.as_ref()),
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeFpgaImagesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeFpgaImagesInput {
    type Output = DescribeFpgaImagesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeFpgaImages;
}

/// EC2 DescribeImagesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeImagesInput {
    #[serde(rename = "ExecutableUsers", skip_serializing_if = "Option::is_none")]
    pub executable_users: Option<Vec<String>>,
    /// The filters.
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// The image IDs.
    #[serde(rename = "ImageIds", skip_serializing_if = "Option::is_none")]
    pub image_ids: Option<Vec<String>>,
    #[serde(rename = "Owners", skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl DescribeImagesInput {
    /// Returns the `ExecutableUsers` member.
    #[must_use]
    pub fn executable_users(&self) -> Option<&[String]> {
        self.executable_users.as_deref()
    }

    /// Sets the `ExecutableUsers` member, replacing any previous value.
    pub fn set_executable_users(&mut self, executable_users: Option<Vec<String>>) {
        self.executable_users = executable_users;
    }

    /// Appends to the `ExecutableUsers` member and returns the updated value.
    #[must_use]
    pub fn with_executable_users(
        mut self,
        executable_users: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.executable_users
            .get_or_insert_with(Vec::new)
            .extend(executable_users.into_iter().map(Into::into));
        self
    }

    /// Returns the `Filters` member.
    #[must_use]
    pub fn filters(&self) -> Option<&[Filter]> {
        self.filters.as_deref()
    }

    /// Sets the `Filters` member, replacing any previous value.
    pub fn set_filters(&mut self, filters: Option<Vec<Filter>>) {
        self.filters = filters;
    }

    /// Appends to the `Filters` member and returns the updated value.
    #[must_use]
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = impl Into<Filter>>) -> Self {
        self.filters
            .get_or_insert_with(Vec::new)
            .extend(filters.into_iter().map(Into::into));
        self
    }

    /// Returns the `ImageIds` member.
    #[must_use]
    pub fn image_ids(&self) -> Option<&[String]> {
        self.image_ids.as_deref()
    }

    /// Sets the `ImageIds` member, replacing any previous value.
    pub fn set_image_ids(&mut self, image_ids: Option<Vec<String>>) {
        self.image_ids = image_ids;
    }

    /// Appends to the `ImageIds` member and returns the updated value.
    #[must_use]
    pub fn with_image_ids(
        mut self,
        image_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.image_ids
            .get_or_insert_with(Vec::new)
            .extend(image_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `Owners` member.
    #[must_use]
    pub fn owners(&self) -> Option<&[String]> {
        self.owners.as_deref()
    }

    /// Sets the `Owners` member, replacing any previous value.
    pub fn set_owners(&mut self, owners: Option<Vec<String>>) {
        self.owners = owners;
    }

    /// Appends to the `Owners` member and returns the updated value.
    #[must_use]
    pub fn with_owners(mut self, owners: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.owners
            .get_or_insert_with(Vec::new)
            .extend(owners.into_iter().map(Into::into));
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
}

impl Shape for DescribeImagesInput {
    const SHAPE_NAME: &'static str = "DescribeImagesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ExecutableUsers", false, self.executable_users.as_ref()),
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("ImageIds", false, self.image_ids.as_ref()),
            Member::new("Owners", false, self.owners.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeImagesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeImagesInput {
    type Output = DescribeImagesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeImages;
}

/// EC2 ImportImageInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportImageInput {
    /// The architecture of the virtual machine.
    #[serde(rename = "Architecture", skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    /// The client-specific data.
    #[serde(rename = "ClientData", skip_serializing_if = "Option::is_none")]
    pub client_data: Option<ClientData>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Information about the disk containers.
    #[serde(rename = "DiskContainers", skip_serializing_if = "Option::is_none")]
    pub disk_containers: Option<Vec<ImageDiskContainer>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "LicenseType", skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(rename = "RoleName", skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(rename = "LicenseSpecifications", skip_serializing_if = "Option::is_none")]
    pub license_specifications: Option<Vec<ImportImageLicenseConfigurationRequest>>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
}

impl ImportImageInput {
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

    /// Returns the `ClientData` member.
    #[must_use]
    pub fn client_data(&self) -> Option<&ClientData> {
        self.client_data.as_ref()
    }

    /// Sets the `ClientData` member, replacing any previous value.
    pub fn set_client_data(&mut self, client_data: Option<ClientData>) {
        self.client_data = client_data;
    }

    /// Sets the `ClientData` member and returns the updated value.
    #[must_use]
    pub fn with_client_data(mut self, client_data: impl Into<ClientData>) -> Self {
        self.client_data = Some(client_data.into());
        self
    }

    /// Returns the `ClientToken` member.
    #[must_use]
    pub fn client_token(&self) -> Option<&str> {
        self.client_token.as_deref()
    }

    /// Sets the `ClientToken` member, replacing any previous value.
    pub fn set_client_token(&mut self, client_token: Option<String>) {
        self.client_token = client_token;
    }

    /// Sets the `ClientToken` member and returns the updated value.
    #[must_use]
    pub fn with_client_token(mut self, client_token: impl Into<String>) -> Self {
        self.client_token = Some(client_token.into());
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

    /// Returns the `DiskContainers` member.
    #[must_use]
    pub fn disk_containers(&self) -> Option<&[ImageDiskContainer]> {
        self.disk_containers.as_deref()
    }

    /// Sets the `DiskContainers` member, replacing any previous value.
    pub fn set_disk_containers(&mut self, disk_containers: Option<Vec<ImageDiskContainer>>) {
        self.disk_containers = disk_containers;
    }

    /// Appends to the `DiskContainers` member and returns the updated value.
    #[must_use]
    pub fn with_disk_containers(
        mut self,
        disk_containers: impl IntoIterator<Item = impl Into<ImageDiskContainer>>,
    ) -> Self {
        self.disk_containers
            .get_or_insert_with(Vec::new)
            .extend(disk_containers.into_iter().map(Into::into));
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

    /// Returns the `RoleName` member.
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.role_name.as_deref()
    }

    /// Sets the `RoleName` member, replacing any previous value.
    pub fn set_role_name(&mut self, role_name: Option<String>) {
        self.role_name = role_name;
    }

    /// Sets the `RoleName` member and returns the updated value.
    #[must_use]
    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    /// Returns the `LicenseSpecifications` member.
    #[must_use]
    pub fn license_specifications(&self) -> Option<&[ImportImageLicenseConfigurationRequest]> {
        self.license_specifications.as_deref()
    }

    /// Sets the `LicenseSpecifications` member, replacing any previous value.
    pub fn set_license_specifications(
        &mut self,
        license_specifications: Option<Vec<ImportImageLicenseConfigurationRequest>>,
    ) {
        self.license_specifications = license_specifications;
    }

    /// Appends to the `LicenseSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_license_specifications(
        mut self,
        license_specifications: impl IntoIterator<Item = impl Into<ImportImageLicenseConfigurationRequest>>,
    ) -> Self {
        self.license_specifications
            .get_or_insert_with(Vec::new)
            .extend(license_specifications.into_iter().map(Into::into));
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
}

impl Shape for ImportImageInput {
    const SHAPE_NAME: &'static str = "ImportImageRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Architecture", false, self.architecture.as_ref()),
            Member::new("ClientData", false, self.client_data.as_ref()),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("DiskContainers", false, self.disk_containers.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("Encrypted", false, self.encrypted.as_ref()),
            Member::new("Hypervisor", false, self.hypervisor.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("LicenseType", false, self.license_type.as_ref()),
            Member::new("Platform", false, self.platform.as_ref()),
            Member::new("RoleName", false, self.role_name.as_ref()),
            Member::new("LicenseSpecifications", false, self.license_specifications.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
        ]
    }
}

impl fmt::Display for ImportImageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for ImportImageInput {
    type Output = ImportImageOutput;

    const OPERATION: Ec2Operation = Ec2Operation::ImportImage;
}

