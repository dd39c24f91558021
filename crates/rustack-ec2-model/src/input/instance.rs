//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::operations::Ec2Operation;
use crate::output::{
    CreateCapacityReservationOutput, CreateLaunchTemplateOutput, DescribeCapacityReservationsOutput,
    DescribeFleetsOutput, DescribeInstanceTypesOutput, DescribeInstancesOutput,
    DescribeReservedInstancesOfferingsOutput, DescribeReservedInstancesOutput,
    DescribeSpotFleetRequestsOutput, DescribeSpotInstanceRequestsOutput,
    GetLaunchTemplateDataOutput, RunInstancesOutput,
};
use crate::request::Ec2Request;
use crate::shape::{Member, Shape, render};
use crate::types::{
    BlockDeviceMapping, CapacityReservationInstancePlatform, CapacityReservationSpecification,
    CapacityReservationTenancy, CpuOptionsRequest, CreditSpecificationRequest,
    ElasticGpuSpecification, ElasticInferenceAccelerator, EndDateType, Filter,
    HibernationOptionsRequest, IamInstanceProfileSpecification, InstanceIpv6Address,
    InstanceMarketOptionsRequest, InstanceMatchCriteria, InstanceMetadataOptionsRequest,
    InstanceNetworkInterfaceSpecification, InstanceType, LaunchTemplateSpecification,
    LicenseConfigurationRequest, OfferingClassType, OfferingTypeValues, Placement,
    RIProductDescription, RequestLaunchTemplateData, RunInstancesMonitoringEnabled,
    ShutdownBehavior, TagSpecification, Tenancy,
};

/// EC2 CreateCapacityReservationInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateCapacityReservationInput {
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// The instance type for which to reserve capacity.
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// The type of operating system for which to reserve capacity.
    #[serde(rename = "InstancePlatform", skip_serializing_if = "Option::is_none")]
    pub instance_platform: Option<CapacityReservationInstancePlatform>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "AvailabilityZoneId", skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<CapacityReservationTenancy>,
    /// The number of instances for which to reserve capacity.
    #[serde(rename = "InstanceCount", skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "EphemeralStorage", skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<bool>,
    /// The date and time at which the Capacity Reservation expires.
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(rename = "EndDateType", skip_serializing_if = "Option::is_none")]
    pub end_date_type: Option<EndDateType>,
    #[serde(rename = "InstanceMatchCriteria", skip_serializing_if = "Option::is_none")]
    pub instance_match_criteria: Option<InstanceMatchCriteria>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl CreateCapacityReservationInput {
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

    /// Returns the `InstanceType` member.
    #[must_use]
    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    /// Sets the `InstanceType` member, replacing any previous value.
    pub fn set_instance_type(&mut self, instance_type: Option<String>) {
        self.instance_type = instance_type;
    }

    /// Sets the `InstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    /// Returns the `InstancePlatform` member.
    #[must_use]
    pub fn instance_platform(&self) -> Option<&CapacityReservationInstancePlatform> {
        self.instance_platform.as_ref()
    }

    /// Sets the `InstancePlatform` member, replacing any previous value.
    pub fn set_instance_platform(
        &mut self,
        instance_platform: Option<CapacityReservationInstancePlatform>,
    ) {
        self.instance_platform = instance_platform;
    }

    /// Sets the `InstancePlatform` member and returns the updated value.
    #[must_use]
    pub fn with_instance_platform(
        mut self,
        instance_platform: impl Into<CapacityReservationInstancePlatform>,
    ) -> Self {
        self.instance_platform = Some(instance_platform.into());
        self
    }

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

    /// Returns the `AvailabilityZoneId` member.
    #[must_use]
    pub fn availability_zone_id(&self) -> Option<&str> {
        self.availability_zone_id.as_deref()
    }

    /// Sets the `AvailabilityZoneId` member, replacing any previous value.
    pub fn set_availability_zone_id(&mut self, availability_zone_id: Option<String>) {
        self.availability_zone_id = availability_zone_id;
    }

    /// Sets the `AvailabilityZoneId` member and returns the updated value.
    #[must_use]
    pub fn with_availability_zone_id(mut self, availability_zone_id: impl Into<String>) -> Self {
        self.availability_zone_id = Some(availability_zone_id.into());
        self
    }

    /// Returns the `Tenancy` member.
    #[must_use]
    pub fn tenancy(&self) -> Option<&CapacityReservationTenancy> {
        self.tenancy.as_ref()
    }

    /// Sets the `Tenancy` member, replacing any previous value.
    pub fn set_tenancy(&mut self, tenancy: Option<CapacityReservationTenancy>) {
        self.tenancy = tenancy;
    }

    /// Sets the `Tenancy` member and returns the updated value.
    #[must_use]
    pub fn with_tenancy(mut self, tenancy: impl Into<CapacityReservationTenancy>) -> Self {
        self.tenancy = Some(tenancy.into());
        self
    }

    /// Returns the `InstanceCount` member.
    #[must_use]
    pub fn instance_count(&self) -> Option<i32> {
        self.instance_count
    }

    /// Sets the `InstanceCount` member, replacing any previous value.
    pub fn set_instance_count(&mut self, instance_count: Option<i32>) {
        self.instance_count = instance_count;
    }

    /// Sets the `InstanceCount` member and returns the updated value.
    #[must_use]
    pub fn with_instance_count(mut self, instance_count: impl Into<i32>) -> Self {
        self.instance_count = Some(instance_count.into());
        self
    }

    /// Returns the `EbsOptimized` member.
    #[must_use]
    pub fn ebs_optimized(&self) -> Option<bool> {
        self.ebs_optimized
    }

    /// Sets the `EbsOptimized` member, replacing any previous value.
    pub fn set_ebs_optimized(&mut self, ebs_optimized: Option<bool>) {
        self.ebs_optimized = ebs_optimized;
    }

    /// Sets the `EbsOptimized` member and returns the updated value.
    #[must_use]
    pub fn with_ebs_optimized(mut self, ebs_optimized: impl Into<bool>) -> Self {
        self.ebs_optimized = Some(ebs_optimized.into());
        self
    }

    /// Returns the `EphemeralStorage` member.
    #[must_use]
    pub fn ephemeral_storage(&self) -> Option<bool> {
        self.ephemeral_storage
    }

    /// Sets the `EphemeralStorage` member, replacing any previous value.
    pub fn set_ephemeral_storage(&mut self, ephemeral_storage: Option<bool>) {
        self.ephemeral_storage = ephemeral_storage;
    }

    /// Sets the `EphemeralStorage` member and returns the updated value.
    #[must_use]
    pub fn with_ephemeral_storage(mut self, ephemeral_storage: impl Into<bool>) -> Self {
        self.ephemeral_storage = Some(ephemeral_storage.into());
        self
    }

    /// Returns the `EndDate` member.
    #[must_use]
    pub fn end_date(&self) -> Option<&DateTime<Utc>> {
        self.end_date.as_ref()
    }

    /// Sets the `EndDate` member, replacing any previous value.
    pub fn set_end_date(&mut self, end_date: Option<DateTime<Utc>>) {
        self.end_date = end_date;
    }

    /// Sets the `EndDate` member and returns the updated value.
    #[must_use]
    pub fn with_end_date(mut self, end_date: impl Into<DateTime<Utc>>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Returns the `EndDateType` member.
    #[must_use]
    pub fn end_date_type(&self) -> Option<&EndDateType> {
        self.end_date_type.as_ref()
    }

    /// Sets the `EndDateType` member, replacing any previous value.
    pub fn set_end_date_type(&mut self, end_date_type: Option<EndDateType>) {
        self.end_date_type = end_date_type;
    }

    /// Sets the `EndDateType` member and returns the updated value.
    #[must_use]
    pub fn with_end_date_type(mut self, end_date_type: impl Into<EndDateType>) -> Self {
        self.end_date_type = Some(end_date_type.into());
        self
    }

    /// Returns the `InstanceMatchCriteria` member.
    #[must_use]
    pub fn instance_match_criteria(&self) -> Option<&InstanceMatchCriteria> {
        self.instance_match_criteria.as_ref()
    }

    /// Sets the `InstanceMatchCriteria` member, replacing any previous value.
    pub fn set_instance_match_criteria(
        &mut self,
        instance_match_criteria: Option<InstanceMatchCriteria>,
    ) {
        self.instance_match_criteria = instance_match_criteria;
    }

    /// Sets the `InstanceMatchCriteria` member and returns the updated value.
    #[must_use]
    pub fn with_instance_match_criteria(
        mut self,
        instance_match_criteria: impl Into<InstanceMatchCriteria>,
    ) -> Self {
        self.instance_match_criteria = Some(instance_match_criteria.into());
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

impl Shape for CreateCapacityReservationInput {
    const SHAPE_NAME: &'static str = "CreateCapacityReservationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new("InstanceType", true, self.instance_type.as_ref()),
            Member::new("InstancePlatform", true, self.instance_platform.as_ref()),
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("AvailabilityZoneId", false, self.availability_zone_id.as_ref()),
            Member::new("Tenancy", false, self.tenancy.as_ref()),
            Member::new("InstanceCount", true, self.instance_count.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("EphemeralStorage", false, self.ephemeral_storage.as_ref()),
            Member::new("EndDate", false, self.end_date.as_ref()),
            Member::new("EndDateType", false, self.end_date_type.as_ref()),
            Member::new("InstanceMatchCriteria", false, self.instance_match_criteria.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
        ]
    }
}

impl fmt::Display for CreateCapacityReservationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for CreateCapacityReservationInput {
    type Output = CreateCapacityReservationOutput;

    const OPERATION: Ec2Operation = Ec2Operation::CreateCapacityReservation;
}

/// EC2 CreateLaunchTemplateInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateLaunchTemplateInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// A name for the launch template.
    #[serde(rename = "LaunchTemplateName", skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,
    #[serde(rename = "VersionDescription", skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
    /// The information for the launch template.
    #[serde(rename = "LaunchTemplateData", skip_serializing_if = "Option::is_none")]
    pub launch_template_data: Option<RequestLaunchTemplateData>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
}

impl CreateLaunchTemplateInput {
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

    /// Returns the `LaunchTemplateName` member.
    #[must_use]
    pub fn launch_template_name(&self) -> Option<&str> {
        self.launch_template_name.as_deref()
    }

    /// Sets the `LaunchTemplateName` member, replacing any previous value.
    pub fn set_launch_template_name(&mut self, launch_template_name: Option<String>) {
        self.launch_template_name = launch_template_name;
    }

    /// Sets the `LaunchTemplateName` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_name(mut self, launch_template_name: impl Into<String>) -> Self {
        self.launch_template_name = Some(launch_template_name.into());
        self
    }

    /// Returns the `VersionDescription` member.
    #[must_use]
    pub fn version_description(&self) -> Option<&str> {
        self.version_description.as_deref()
    }

    /// Sets the `VersionDescription` member, replacing any previous value.
    pub fn set_version_description(&mut self, version_description: Option<String>) {
        self.version_description = version_description;
    }

    /// Sets the `VersionDescription` member and returns the updated value.
    #[must_use]
    pub fn with_version_description(mut self, version_description: impl Into<String>) -> Self {
        self.version_description = Some(version_description.into());
        self
    }

    /// Returns the `LaunchTemplateData` member.
    #[must_use]
    pub fn launch_template_data(&self) -> Option<&RequestLaunchTemplateData> {
        self.launch_template_data.as_ref()
    }

    /// Sets the `LaunchTemplateData` member, replacing any previous value.
    pub fn set_launch_template_data(
        &mut self,
        launch_template_data: Option<RequestLaunchTemplateData>,
    ) {
        self.launch_template_data = launch_template_data;
    }

    /// Sets the `LaunchTemplateData` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_data(
        mut self,
        launch_template_data: impl Into<RequestLaunchTemplateData>,
    ) -> Self {
        self.launch_template_data = Some(launch_template_data.into());
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

impl Shape for CreateLaunchTemplateInput {
    const SHAPE_NAME: &'static str = "CreateLaunchTemplateRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new("LaunchTemplateName", true, self.launch_template_name.as_ref()),
            Member::new("VersionDescription", false, self.version_description.as_ref()),
            Member::new("LaunchTemplateData", true, self.launch_template_data.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
        ]
    }
}

impl fmt::Display for CreateLaunchTemplateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for CreateLaunchTemplateInput {
    type Output = CreateLaunchTemplateOutput;

    const OPERATION: Ec2Operation = Ec2Operation::CreateLaunchTemplate;
}

/// EC2 DescribeCapacityReservationsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeCapacityReservationsInput {
    #[serde(rename = "CapacityReservationIds", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl DescribeCapacityReservationsInput {
    /// Returns the `CapacityReservationIds` member.
    #[must_use]
    pub fn capacity_reservation_ids(&self) -> Option<&[String]> {
        self.capacity_reservation_ids.as_deref()
    }

    /// Sets the `CapacityReservationIds` member, replacing any previous value.
    pub fn set_capacity_reservation_ids(&mut self, capacity_reservation_ids: Option<Vec<String>>) {
        self.capacity_reservation_ids = capacity_reservation_ids;
    }

    /// Appends to the `CapacityReservationIds` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_ids(
        mut self,
        capacity_reservation_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.capacity_reservation_ids
            .get_or_insert_with(Vec::new)
            .extend(capacity_reservation_ids.into_iter().map(Into::into));
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

impl Shape for DescribeCapacityReservationsInput {
    const SHAPE_NAME: &'static str = "DescribeCapacityReservationsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CapacityReservationIds", false, self.capacity_reservation_ids.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeCapacityReservationsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeCapacityReservationsInput {
    type Output = DescribeCapacityReservationsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeCapacityReservations;
}

/// EC2 DescribeFleetsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeFleetsInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// The ID of the EC2 Fleets.
    #[serde(rename = "FleetIds", skip_serializing_if = "Option::is_none")]
    pub fleet_ids: Option<Vec<String>>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

impl DescribeFleetsInput {
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

    /// Returns the `FleetIds` member.
    #[must_use]
    pub fn fleet_ids(&self) -> Option<&[String]> {
        self.fleet_ids.as_deref()
    }

    /// Sets the `FleetIds` member, replacing any previous value.
    pub fn set_fleet_ids(&mut self, fleet_ids: Option<Vec<String>>) {
        self.fleet_ids = fleet_ids;
    }

    /// Appends to the `FleetIds` member and returns the updated value.
    #[must_use]
    pub fn with_fleet_ids(
        mut self,
        fleet_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.fleet_ids
            .get_or_insert_with(Vec::new)
            .extend(fleet_ids.into_iter().map(Into::into));
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
}

impl Shape for DescribeFleetsInput {
    const SHAPE_NAME: &'static str = "DescribeFleetsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("FleetIds", false, self.fleet_ids.as_ref()),
            Member::new("Filters", false, self.filters.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeFleetsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeFleetsInput {
    type Output = DescribeFleetsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeFleets;
}

/// EC2 DescribeInstanceTypesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeInstanceTypesInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// The instance types.
    #[serde(rename = "InstanceTypes", skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<Vec<InstanceType>>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInstanceTypesInput {
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

    /// Returns the `InstanceTypes` member.
    #[must_use]
    pub fn instance_types(&self) -> Option<&[InstanceType]> {
        self.instance_types.as_deref()
    }

    /// Sets the `InstanceTypes` member, replacing any previous value.
    pub fn set_instance_types(&mut self, instance_types: Option<Vec<InstanceType>>) {
        self.instance_types = instance_types;
    }

    /// Appends to the `InstanceTypes` member and returns the updated value.
    #[must_use]
    pub fn with_instance_types(
        mut self,
        instance_types: impl IntoIterator<Item = impl Into<InstanceType>>,
    ) -> Self {
        self.instance_types
            .get_or_insert_with(Vec::new)
            .extend(instance_types.into_iter().map(Into::into));
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

impl Shape for DescribeInstanceTypesInput {
    const SHAPE_NAME: &'static str = "DescribeInstanceTypesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("InstanceTypes", false, self.instance_types.as_ref()),
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeInstanceTypesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeInstanceTypesInput {
    type Output = DescribeInstanceTypesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeInstanceTypes;
}

/// EC2 DescribeInstancesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeInstancesInput {
    /// The filters.
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// The instance IDs.
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInstancesInput {
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

    /// Returns the `InstanceIds` member.
    #[must_use]
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    /// Sets the `InstanceIds` member, replacing any previous value.
    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    /// Appends to the `InstanceIds` member and returns the updated value.
    #[must_use]
    pub fn with_instance_ids(
        mut self,
        instance_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

impl Shape for DescribeInstancesInput {
    const SHAPE_NAME: &'static str = "DescribeInstancesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("InstanceIds", false, self.instance_ids.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeInstancesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeInstancesInput {
    type Output = DescribeInstancesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeInstances;
}

/// EC2 DescribeReservedInstancesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeReservedInstancesInput {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "OfferingClass", skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    /// One or more Reserved Instance IDs.
    #[serde(rename = "ReservedInstancesIds", skip_serializing_if = "Option::is_none")]
    pub reserved_instances_ids: Option<Vec<String>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "OfferingType", skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
}

impl DescribeReservedInstancesInput {
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

    /// Returns the `OfferingClass` member.
    #[must_use]
    pub fn offering_class(&self) -> Option<&OfferingClassType> {
        self.offering_class.as_ref()
    }

    /// Sets the `OfferingClass` member, replacing any previous value.
    pub fn set_offering_class(&mut self, offering_class: Option<OfferingClassType>) {
        self.offering_class = offering_class;
    }

    /// Sets the `OfferingClass` member and returns the updated value.
    #[must_use]
    pub fn with_offering_class(mut self, offering_class: impl Into<OfferingClassType>) -> Self {
        self.offering_class = Some(offering_class.into());
        self
    }

    /// Returns the `ReservedInstancesIds` member.
    #[must_use]
    pub fn reserved_instances_ids(&self) -> Option<&[String]> {
        self.reserved_instances_ids.as_deref()
    }

    /// Sets the `ReservedInstancesIds` member, replacing any previous value.
    pub fn set_reserved_instances_ids(&mut self, reserved_instances_ids: Option<Vec<String>>) {
        self.reserved_instances_ids = reserved_instances_ids;
    }

    /// Appends to the `ReservedInstancesIds` member and returns the updated value.
    #[must_use]
    pub fn with_reserved_instances_ids(
        mut self,
        reserved_instances_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.reserved_instances_ids
            .get_or_insert_with(Vec::new)
            .extend(reserved_instances_ids.into_iter().map(Into::into));
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

    /// Returns the `OfferingType` member.
    #[must_use]
    pub fn offering_type(&self) -> Option<&OfferingTypeValues> {
        self.offering_type.as_ref()
    }

    /// Sets the `OfferingType` member, replacing any previous value.
    pub fn set_offering_type(&mut self, offering_type: Option<OfferingTypeValues>) {
        self.offering_type = offering_type;
    }

    /// Sets the `OfferingType` member and returns the updated value.
    #[must_use]
    pub fn with_offering_type(mut self, offering_type: impl Into<OfferingTypeValues>) -> Self {
        self.offering_type = Some(offering_type.into());
        self
    }
}

impl Shape for DescribeReservedInstancesInput {
    const SHAPE_NAME: &'static str = "DescribeReservedInstancesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("OfferingClass", false, self.offering_class.as_ref()),
            Member::new("ReservedInstancesIds", false, self.reserved_instances_ids.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("OfferingType", false, self.offering_type.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeReservedInstancesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeReservedInstancesInput {
    type Output = DescribeReservedInstancesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeReservedInstances;
}

/// EC2 DescribeReservedInstancesOfferingsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeReservedInstancesOfferingsInput {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Include Reserved Instance Marketplace offerings in the response.
    #[serde(rename = "IncludeMarketplace", skip_serializing_if = "Option::is_none")]
    pub include_marketplace: Option<bool>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    /// The maximum duration (in seconds) to filter when searching for offerings.
    #[serde(rename = "MaxDuration", skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i64>,
    #[serde(rename = "MaxInstanceCount", skip_serializing_if = "Option::is_none")]
    pub max_instance_count: Option<i32>,
    /// The minimum duration (in seconds) to filter when searching for offerings.
    #[serde(rename = "MinDuration", skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<i64>,
    #[serde(rename = "OfferingClass", skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    #[serde(rename = "ProductDescription", skip_serializing_if = "Option::is_none")]
    pub product_description: Option<RIProductDescription>,
    #[serde(rename = "ReservedInstancesOfferingIds", skip_serializing_if = "Option::is_none")]
    pub reserved_instances_offering_ids: Option<Vec<String>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Tenancy>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "OfferingType", skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
}

impl DescribeReservedInstancesOfferingsInput {
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

    /// Returns the `IncludeMarketplace` member.
    #[must_use]
    pub fn include_marketplace(&self) -> Option<bool> {
        self.include_marketplace
    }

    /// Sets the `IncludeMarketplace` member, replacing any previous value.
    pub fn set_include_marketplace(&mut self, include_marketplace: Option<bool>) {
        self.include_marketplace = include_marketplace;
    }

    /// Sets the `IncludeMarketplace` member and returns the updated value.
    #[must_use]
    pub fn with_include_marketplace(mut self, include_marketplace: impl Into<bool>) -> Self {
        self.include_marketplace = Some(include_marketplace.into());
        self
    }

    /// Returns the `InstanceType` member.
    #[must_use]
    pub fn instance_type(&self) -> Option<&InstanceType> {
        self.instance_type.as_ref()
    }

    /// Sets the `InstanceType` member, replacing any previous value.
    pub fn set_instance_type(&mut self, instance_type: Option<InstanceType>) {
        self.instance_type = instance_type;
    }

    /// Sets the `InstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_instance_type(mut self, instance_type: impl Into<InstanceType>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    /// Returns the `MaxDuration` member.
    #[must_use]
    pub fn max_duration(&self) -> Option<i64> {
        self.max_duration
    }

    /// Sets the `MaxDuration` member, replacing any previous value.
    pub fn set_max_duration(&mut self, max_duration: Option<i64>) {
        self.max_duration = max_duration;
    }

    /// Sets the `MaxDuration` member and returns the updated value.
    #[must_use]
    pub fn with_max_duration(mut self, max_duration: impl Into<i64>) -> Self {
        self.max_duration = Some(max_duration.into());
        self
    }

    /// Returns the `MaxInstanceCount` member.
    #[must_use]
    pub fn max_instance_count(&self) -> Option<i32> {
        self.max_instance_count
    }

    /// Sets the `MaxInstanceCount` member, replacing any previous value.
    pub fn set_max_instance_count(&mut self, max_instance_count: Option<i32>) {
        self.max_instance_count = max_instance_count;
    }

    /// Sets the `MaxInstanceCount` member and returns the updated value.
    #[must_use]
    pub fn with_max_instance_count(mut self, max_instance_count: impl Into<i32>) -> Self {
        self.max_instance_count = Some(max_instance_count.into());
        self
    }

    /// Returns the `MinDuration` member.
    #[must_use]
    pub fn min_duration(&self) -> Option<i64> {
        self.min_duration
    }

    /// Sets the `MinDuration` member, replacing any previous value.
    pub fn set_min_duration(&mut self, min_duration: Option<i64>) {
        self.min_duration = min_duration;
    }

    /// Sets the `MinDuration` member and returns the updated value.
    #[must_use]
    pub fn with_min_duration(mut self, min_duration: impl Into<i64>) -> Self {
        self.min_duration = Some(min_duration.into());
        self
    }

    /// Returns the `OfferingClass` member.
    #[must_use]
    pub fn offering_class(&self) -> Option<&OfferingClassType> {
        self.offering_class.as_ref()
    }

    /// Sets the `OfferingClass` member, replacing any previous value.
    pub fn set_offering_class(&mut self, offering_class: Option<OfferingClassType>) {
        self.offering_class = offering_class;
    }

    /// Sets the `OfferingClass` member and returns the updated value.
    #[must_use]
    pub fn with_offering_class(mut self, offering_class: impl Into<OfferingClassType>) -> Self {
        self.offering_class = Some(offering_class.into());
        self
    }

    /// Returns the `ProductDescription` member.
    #[must_use]
    pub fn product_description(&self) -> Option<&RIProductDescription> {
        self.product_description.as_ref()
    }

    /// Sets the `ProductDescription` member, replacing any previous value.
    pub fn set_product_description(&mut self, product_description: Option<RIProductDescription>) {
        self.product_description = product_description;
    }

    /// Sets the `ProductDescription` member and returns the updated value.
    #[must_use]
    pub fn with_product_description(
        mut self,
        product_description: impl Into<RIProductDescription>,
    ) -> Self {
        self.product_description = Some(product_description.into());
        self
    }

    /// Returns the `ReservedInstancesOfferingIds` member.
    #[must_use]
    pub fn reserved_instances_offering_ids(&self) -> Option<&[String]> {
        self.reserved_instances_offering_ids.as_deref()
    }

    /// Sets the `ReservedInstancesOfferingIds` member, replacing any previous value.
    pub fn set_reserved_instances_offering_ids(
        &mut self,
        reserved_instances_offering_ids: Option<Vec<String>>,
    ) {
        self.reserved_instances_offering_ids = reserved_instances_offering_ids;
    }

    /// Appends to the `ReservedInstancesOfferingIds` member and returns the updated value.
    #[must_use]
    pub fn with_reserved_instances_offering_ids(
        mut self,
        reserved_instances_offering_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.reserved_instances_offering_ids
            .get_or_insert_with(Vec::new)
            .extend(reserved_instances_offering_ids.into_iter().map(Into::into));
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

    /// Returns the `InstanceTenancy` member.
    #[must_use]
    pub fn instance_tenancy(&self) -> Option<&Tenancy> {
        self.instance_tenancy.as_ref()
    }

    /// Sets the `InstanceTenancy` member, replacing any previous value.
    pub fn set_instance_tenancy(&mut self, instance_tenancy: Option<Tenancy>) {
        self.instance_tenancy = instance_tenancy;
    }

    /// Sets the `InstanceTenancy` member and returns the updated value.
    #[must_use]
    pub fn with_instance_tenancy(mut self, instance_tenancy: impl Into<Tenancy>) -> Self {
        self.instance_tenancy = Some(instance_tenancy.into());
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

    /// Returns the `OfferingType` member.
    #[must_use]
    pub fn offering_type(&self) -> Option<&OfferingTypeValues> {
        self.offering_type.as_ref()
    }

    /// Sets the `OfferingType` member, replacing any previous value.
    pub fn set_offering_type(&mut self, offering_type: Option<OfferingTypeValues>) {
        self.offering_type = offering_type;
    }

    /// Sets the `OfferingType` member and returns the updated value.
    #[must_use]
    pub fn with_offering_type(mut self, offering_type: impl Into<OfferingTypeValues>) -> Self {
        self.offering_type = Some(offering_type.into());
        self
    }
}

impl Shape for DescribeReservedInstancesOfferingsInput {
    const SHAPE_NAME: &'static str = "DescribeReservedInstancesOfferingsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("IncludeMarketplace", false, self.include_marketplace.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("MaxDuration", false, self.max_duration.as_ref()),
            Member::new("MaxInstanceCount", false, self.max_instance_count.as_ref()),
            Member::new("MinDuration", false, self.min_duration.as_ref()),
            Member::new("OfferingClass", false, self.offering_class.as_ref()),
            Member::new("ProductDescription", false, self.product_description.as_ref()),
            Member::new(
                "ReservedInstancesOfferingIds",
                false,
                self.reserved_instances_offering_ids.as_ref(),
            ),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("InstanceTenancy", false, self.instance_tenancy.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("OfferingType", false, self.offering_type.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeReservedInstancesOfferingsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeReservedInstancesOfferingsInput {
    type Output = DescribeReservedInstancesOfferingsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeReservedInstancesOfferings;
}

/// EC2 DescribeSpotFleetRequestsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeSpotFleetRequestsInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// The IDs of the Spot Fleet requests.
    #[serde(rename = "SpotFleetRequestIds", skip_serializing_if = "Option::is_none")]
    pub spot_fleet_request_ids: Option<Vec<String>>,
}

impl DescribeSpotFleetRequestsInput {
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

    /// Returns the `SpotFleetRequestIds` member.
    #[must_use]
    pub fn spot_fleet_request_ids(&self) -> Option<&[String]> {
        self.spot_fleet_request_ids.as_deref()
    }

    /// Sets the `SpotFleetRequestIds` member, replacing any previous value.
    pub fn set_spot_fleet_request_ids(&mut self, spot_fleet_request_ids: Option<Vec<String>>) {
        self.spot_fleet_request_ids = spot_fleet_request_ids;
    }

    /// Appends to the `SpotFleetRequestIds` member and returns the updated value.
    #[must_use]
    pub fn with_spot_fleet_request_ids(
        mut self,
        spot_fleet_request_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.spot_fleet_request_ids
            .get_or_insert_with(Vec::new)
            .extend(spot_fleet_request_ids.into_iter().map(Into::into));
        self
    }
}

impl Shape for DescribeSpotFleetRequestsInput {
    const SHAPE_NAME: &'static str = "DescribeSpotFleetRequestsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("SpotFleetRequestIds", false, self.spot_fleet_request_ids.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeSpotFleetRequestsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeSpotFleetRequestsInput {
    type Output = DescribeSpotFleetRequestsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeSpotFleetRequests;
}

/// EC2 DescribeSpotInstanceRequestsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeSpotInstanceRequestsInput {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// One or more Spot Instance request IDs.
    #[serde(rename = "SpotInstanceRequestIds", skip_serializing_if = "Option::is_none")]
    pub spot_instance_request_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeSpotInstanceRequestsInput {
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

    /// Returns the `SpotInstanceRequestIds` member.
    #[must_use]
    pub fn spot_instance_request_ids(&self) -> Option<&[String]> {
        self.spot_instance_request_ids.as_deref()
    }

    /// Sets the `SpotInstanceRequestIds` member, replacing any previous value.
    pub fn set_spot_instance_request_ids(
        &mut self,
        spot_instance_request_ids: Option<Vec<String>>,
    ) {
        self.spot_instance_request_ids = spot_instance_request_ids;
    }

    /// Appends to the `SpotInstanceRequestIds` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_request_ids(
        mut self,
        spot_instance_request_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.spot_instance_request_ids
            .get_or_insert_with(Vec::new)
            .extend(spot_instance_request_ids.into_iter().map(Into::into));
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

impl Shape for DescribeSpotInstanceRequestsInput {
    const SHAPE_NAME: &'static str = "DescribeSpotInstanceRequestsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("SpotInstanceRequestIds", false, self.spot_instance_request_ids.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeSpotInstanceRequestsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeSpotInstanceRequestsInput {
    type Output = DescribeSpotInstanceRequestsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeSpotInstanceRequests;
}

/// EC2 GetLaunchTemplateDataInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetLaunchTemplateDataInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// The ID of the instance.
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}

impl GetLaunchTemplateDataInput {
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

    /// Returns the `InstanceId` member.
    #[must_use]
    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    /// Sets the `InstanceId` member, replacing any previous value.
    pub fn set_instance_id(&mut self, instance_id: Option<String>) {
        self.instance_id = instance_id;
    }

    /// Sets the `InstanceId` member and returns the updated value.
    #[must_use]
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }
}

impl Shape for GetLaunchTemplateDataInput {
    const SHAPE_NAME: &'static str = "GetLaunchTemplateDataRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("InstanceId", true, self.instance_id.as_ref()),
        ]
    }
}

impl fmt::Display for GetLaunchTemplateDataInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for GetLaunchTemplateDataInput {
    type Output = GetLaunchTemplateDataOutput;

    const OPERATION: Ec2Operation = Ec2Operation::GetLaunchTemplateData;
}

/// EC2 RunInstancesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunInstancesInput {
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    /// The ID of the AMI.
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// The instance type.
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "Ipv6AddressCount", skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<i32>,
    #[serde(rename = "Ipv6Addresses", skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<InstanceIpv6Address>>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// The maximum number of instances to launch.
    #[serde(rename = "MaxCount", skip_serializing_if = "Option::is_none")]
    pub max_count: Option<i32>,
    /// The minimum number of instances to launch.
    #[serde(rename = "MinCount", skip_serializing_if = "Option::is_none")]
    pub min_count: Option<i32>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<RunInstancesMonitoringEnabled>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(rename = "AdditionalInfo", skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "DisableApiTermination", skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfileSpecification>,
    #[serde(rename = "InstanceInitiatedShutdownBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_initiated_shutdown_behavior: Option<ShutdownBehavior>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "ElasticGpuSpecification", skip_serializing_if = "Option::is_none")]
    pub elastic_gpu_specification: Option<Vec<ElasticGpuSpecification>>,
    #[serde(rename = "ElasticInferenceAccelerators", skip_serializing_if = "Option::is_none")]
    pub elastic_inference_accelerators: Option<Vec<ElasticInferenceAccelerator>>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(rename = "InstanceMarketOptions", skip_serializing_if = "Option::is_none")]
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    #[serde(rename = "CreditSpecification", skip_serializing_if = "Option::is_none")]
    pub credit_specification: Option<CreditSpecificationRequest>,
    #[serde(rename = "CpuOptions", skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<CpuOptionsRequest>,
    #[serde(rename = "CapacityReservationSpecification", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_specification: Option<CapacityReservationSpecification>,
    #[serde(rename = "HibernationOptions", skip_serializing_if = "Option::is_none")]
    pub hibernation_options: Option<HibernationOptionsRequest>,
    #[serde(rename = "LicenseSpecifications", skip_serializing_if = "Option::is_none")]
    pub license_specifications: Option<Vec<LicenseConfigurationRequest>>,
    #[serde(rename = "MetadataOptions", skip_serializing_if = "Option::is_none")]
    pub metadata_options: Option<InstanceMetadataOptionsRequest>,
}

impl RunInstancesInput {
    /// Returns the `BlockDeviceMappings` member.
    #[must_use]
    pub fn block_device_mappings(&self) -> Option<&[BlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    /// Sets the `BlockDeviceMappings` member, replacing any previous value.
    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    ) {
        self.block_device_mappings = block_device_mappings;
    }

    /// Appends to the `BlockDeviceMappings` member and returns the updated value.
    #[must_use]
    pub fn with_block_device_mappings(
        mut self,
        block_device_mappings: impl IntoIterator<Item = impl Into<BlockDeviceMapping>>,
    ) -> Self {
        self.block_device_mappings
            .get_or_insert_with(Vec::new)
            .extend(block_device_mappings.into_iter().map(Into::into));
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

    /// Returns the `InstanceType` member.
    #[must_use]
    pub fn instance_type(&self) -> Option<&InstanceType> {
        self.instance_type.as_ref()
    }

    /// Sets the `InstanceType` member, replacing any previous value.
    pub fn set_instance_type(&mut self, instance_type: Option<InstanceType>) {
        self.instance_type = instance_type;
    }

    /// Sets the `InstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_instance_type(mut self, instance_type: impl Into<InstanceType>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    /// Returns the `Ipv6AddressCount` member.
    #[must_use]
    pub fn ipv6_address_count(&self) -> Option<i32> {
        self.ipv6_address_count
    }

    /// Sets the `Ipv6AddressCount` member, replacing any previous value.
    pub fn set_ipv6_address_count(&mut self, ipv6_address_count: Option<i32>) {
        self.ipv6_address_count = ipv6_address_count;
    }

    /// Sets the `Ipv6AddressCount` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_address_count(mut self, ipv6_address_count: impl Into<i32>) -> Self {
        self.ipv6_address_count = Some(ipv6_address_count.into());
        self
    }

    /// Returns the `Ipv6Addresses` member.
    #[must_use]
    pub fn ipv6_addresses(&self) -> Option<&[InstanceIpv6Address]> {
        self.ipv6_addresses.as_deref()
    }

    /// Sets the `Ipv6Addresses` member, replacing any previous value.
    pub fn set_ipv6_addresses(&mut self, ipv6_addresses: Option<Vec<InstanceIpv6Address>>) {
        self.ipv6_addresses = ipv6_addresses;
    }

    /// Appends to the `Ipv6Addresses` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_addresses(
        mut self,
        ipv6_addresses: impl IntoIterator<Item = impl Into<InstanceIpv6Address>>,
    ) -> Self {
        self.ipv6_addresses
            .get_or_insert_with(Vec::new)
            .extend(ipv6_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `KernelId` member.
    #[must_use]
    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel_id.as_deref()
    }

    /// Sets the `KernelId` member, replacing any previous value.
    pub fn set_kernel_id(&mut self, kernel_id: Option<String>) {
        self.kernel_id = kernel_id;
    }

    /// Sets the `KernelId` member and returns the updated value.
    #[must_use]
    pub fn with_kernel_id(mut self, kernel_id: impl Into<String>) -> Self {
        self.kernel_id = Some(kernel_id.into());
        self
    }

    /// Returns the `KeyName` member.
    #[must_use]
    pub fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }

    /// Sets the `KeyName` member, replacing any previous value.
    pub fn set_key_name(&mut self, key_name: Option<String>) {
        self.key_name = key_name;
    }

    /// Sets the `KeyName` member and returns the updated value.
    #[must_use]
    pub fn with_key_name(mut self, key_name: impl Into<String>) -> Self {
        self.key_name = Some(key_name.into());
        self
    }

    /// Returns the `MaxCount` member.
    #[must_use]
    pub fn max_count(&self) -> Option<i32> {
        self.max_count
    }

    /// Sets the `MaxCount` member, replacing any previous value.
    pub fn set_max_count(&mut self, max_count: Option<i32>) {
        self.max_count = max_count;
    }

    /// Sets the `MaxCount` member and returns the updated value.
    #[must_use]
    pub fn with_max_count(mut self, max_count: impl Into<i32>) -> Self {
        self.max_count = Some(max_count.into());
        self
    }

    /// Returns the `MinCount` member.
    #[must_use]
    pub fn min_count(&self) -> Option<i32> {
        self.min_count
    }

    /// Sets the `MinCount` member, replacing any previous value.
    pub fn set_min_count(&mut self, min_count: Option<i32>) {
        self.min_count = min_count;
    }

    /// Sets the `MinCount` member and returns the updated value.
    #[must_use]
    pub fn with_min_count(mut self, min_count: impl Into<i32>) -> Self {
        self.min_count = Some(min_count.into());
        self
    }

    /// Returns the `Monitoring` member.
    #[must_use]
    pub fn monitoring(&self) -> Option<&RunInstancesMonitoringEnabled> {
        self.monitoring.as_ref()
    }

    /// Sets the `Monitoring` member, replacing any previous value.
    pub fn set_monitoring(&mut self, monitoring: Option<RunInstancesMonitoringEnabled>) {
        self.monitoring = monitoring;
    }

    /// Sets the `Monitoring` member and returns the updated value.
    #[must_use]
    pub fn with_monitoring(mut self, monitoring: impl Into<RunInstancesMonitoringEnabled>) -> Self {
        self.monitoring = Some(monitoring.into());
        self
    }

    /// Returns the `Placement` member.
    #[must_use]
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Sets the `Placement` member, replacing any previous value.
    pub fn set_placement(&mut self, placement: Option<Placement>) {
        self.placement = placement;
    }

    /// Sets the `Placement` member and returns the updated value.
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<Placement>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Returns the `RamdiskId` member.
    #[must_use]
    pub fn ramdisk_id(&self) -> Option<&str> {
        self.ramdisk_id.as_deref()
    }

    /// Sets the `RamdiskId` member, replacing any previous value.
    pub fn set_ramdisk_id(&mut self, ramdisk_id: Option<String>) {
        self.ramdisk_id = ramdisk_id;
    }

    /// Sets the `RamdiskId` member and returns the updated value.
    #[must_use]
    pub fn with_ramdisk_id(mut self, ramdisk_id: impl Into<String>) -> Self {
        self.ramdisk_id = Some(ramdisk_id.into());
        self
    }

    /// Returns the `SecurityGroupIds` member.
    #[must_use]
    pub fn security_group_ids(&self) -> Option<&[String]> {
        self.security_group_ids.as_deref()
    }

    /// Sets the `SecurityGroupIds` member, replacing any previous value.
    pub fn set_security_group_ids(&mut self, security_group_ids: Option<Vec<String>>) {
        self.security_group_ids = security_group_ids;
    }

    /// Appends to the `SecurityGroupIds` member and returns the updated value.
    #[must_use]
    pub fn with_security_group_ids(
        mut self,
        security_group_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(security_group_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `SecurityGroups` member.
    #[must_use]
    pub fn security_groups(&self) -> Option<&[String]> {
        self.security_groups.as_deref()
    }

    /// Sets the `SecurityGroups` member, replacing any previous value.
    pub fn set_security_groups(&mut self, security_groups: Option<Vec<String>>) {
        self.security_groups = security_groups;
    }

    /// Appends to the `SecurityGroups` member and returns the updated value.
    #[must_use]
    pub fn with_security_groups(
        mut self,
        security_groups: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `SubnetId` member.
    #[must_use]
    pub fn subnet_id(&self) -> Option<&str> {
        self.subnet_id.as_deref()
    }

    /// Sets the `SubnetId` member, replacing any previous value.
    pub fn set_subnet_id(&mut self, subnet_id: Option<String>) {
        self.subnet_id = subnet_id;
    }

    /// Sets the `SubnetId` member and returns the updated value.
    #[must_use]
    pub fn with_subnet_id(mut self, subnet_id: impl Into<String>) -> Self {
        self.subnet_id = Some(subnet_id.into());
        self
    }

    /// Returns the `UserData` member.
    #[must_use]
    pub fn user_data(&self) -> Option<&str> {
        self.user_data.as_deref()
    }

    /// Sets the `UserData` member, replacing any previous value.
    pub fn set_user_data(&mut self, user_data: Option<String>) {
        self.user_data = user_data;
    }

    /// Sets the `UserData` member and returns the updated value.
    #[must_use]
    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    /// Returns the `AdditionalInfo` member.
    #[must_use]
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    /// Sets the `AdditionalInfo` member, replacing any previous value.
    pub fn set_additional_info(&mut self, additional_info: Option<String>) {
        self.additional_info = additional_info;
    }

    /// Sets the `AdditionalInfo` member and returns the updated value.
    #[must_use]
    pub fn with_additional_info(mut self, additional_info: impl Into<String>) -> Self {
        self.additional_info = Some(additional_info.into());
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

    /// Returns the `DisableApiTermination` member.
    #[must_use]
    pub fn disable_api_termination(&self) -> Option<bool> {
        self.disable_api_termination
    }

    /// Sets the `DisableApiTermination` member, replacing any previous value.
    pub fn set_disable_api_termination(&mut self, disable_api_termination: Option<bool>) {
        self.disable_api_termination = disable_api_termination;
    }

    /// Sets the `DisableApiTermination` member and returns the updated value.
    #[must_use]
    pub fn with_disable_api_termination(
        mut self,
        disable_api_termination: impl Into<bool>,
    ) -> Self {
        self.disable_api_termination = Some(disable_api_termination.into());
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

    /// Returns the `EbsOptimized` member.
    #[must_use]
    pub fn ebs_optimized(&self) -> Option<bool> {
        self.ebs_optimized
    }

    /// Sets the `EbsOptimized` member, replacing any previous value.
    pub fn set_ebs_optimized(&mut self, ebs_optimized: Option<bool>) {
        self.ebs_optimized = ebs_optimized;
    }

    /// Sets the `EbsOptimized` member and returns the updated value.
    #[must_use]
    pub fn with_ebs_optimized(mut self, ebs_optimized: impl Into<bool>) -> Self {
        self.ebs_optimized = Some(ebs_optimized.into());
        self
    }

    /// Returns the `IamInstanceProfile` member.
    #[must_use]
    pub fn iam_instance_profile(&self) -> Option<&IamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    /// Sets the `IamInstanceProfile` member, replacing any previous value.
    pub fn set_iam_instance_profile(
        &mut self,
        iam_instance_profile: Option<IamInstanceProfileSpecification>,
    ) {
        self.iam_instance_profile = iam_instance_profile;
    }

    /// Sets the `IamInstanceProfile` member and returns the updated value.
    #[must_use]
    pub fn with_iam_instance_profile(
        mut self,
        iam_instance_profile: impl Into<IamInstanceProfileSpecification>,
    ) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile.into());
        self
    }

    /// Returns the `InstanceInitiatedShutdownBehavior` member.
    #[must_use]
    pub fn instance_initiated_shutdown_behavior(&self) -> Option<&ShutdownBehavior> {
        self.instance_initiated_shutdown_behavior.as_ref()
    }

    /// Sets the `InstanceInitiatedShutdownBehavior` member, replacing any previous value.
    pub fn set_instance_initiated_shutdown_behavior(
        &mut self,
        instance_initiated_shutdown_behavior: Option<ShutdownBehavior>,
    ) {
        self.instance_initiated_shutdown_behavior = instance_initiated_shutdown_behavior;
    }

    /// Sets the `InstanceInitiatedShutdownBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_initiated_shutdown_behavior(
        mut self,
        instance_initiated_shutdown_behavior: impl Into<ShutdownBehavior>,
    ) -> Self {
        self.instance_initiated_shutdown_behavior = Some(instance_initiated_shutdown_behavior.into());
        self
    }

    /// Returns the `NetworkInterfaces` member.
    #[must_use]
    pub fn network_interfaces(&self) -> Option<&[InstanceNetworkInterfaceSpecification]> {
        self.network_interfaces.as_deref()
    }

    /// Sets the `NetworkInterfaces` member, replacing any previous value.
    pub fn set_network_interfaces(
        &mut self,
        network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    ) {
        self.network_interfaces = network_interfaces;
    }

    /// Appends to the `NetworkInterfaces` member and returns the updated value.
    #[must_use]
    pub fn with_network_interfaces(
        mut self,
        network_interfaces: impl IntoIterator<Item = impl Into<InstanceNetworkInterfaceSpecification>>,
    ) -> Self {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .extend(network_interfaces.into_iter().map(Into::into));
        self
    }

    /// Returns the `PrivateIpAddress` member.
    #[must_use]
    pub fn private_ip_address(&self) -> Option<&str> {
        self.private_ip_address.as_deref()
    }

    /// Sets the `PrivateIpAddress` member, replacing any previous value.
    pub fn set_private_ip_address(&mut self, private_ip_address: Option<String>) {
        self.private_ip_address = private_ip_address;
    }

    /// Sets the `PrivateIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_private_ip_address(mut self, private_ip_address: impl Into<String>) -> Self {
        self.private_ip_address = Some(private_ip_address.into());
        self
    }

    /// Returns the `ElasticGpuSpecification` member.
    #[must_use]
    pub fn elastic_gpu_specification(&self) -> Option<&[ElasticGpuSpecification]> {
        self.elastic_gpu_specification.as_deref()
    }

    /// Sets the `ElasticGpuSpecification` member, replacing any previous value.
    pub fn set_elastic_gpu_specification(
        &mut self,
        elastic_gpu_specification: Option<Vec<ElasticGpuSpecification>>,
    ) {
        self.elastic_gpu_specification = elastic_gpu_specification;
    }

    /// Appends to the `ElasticGpuSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_elastic_gpu_specification(
        mut self,
        elastic_gpu_specification: impl IntoIterator<Item = impl Into<ElasticGpuSpecification>>,
    ) -> Self {
        self.elastic_gpu_specification
            .get_or_insert_with(Vec::new)
            .extend(elastic_gpu_specification.into_iter().map(Into::into));
        self
    }

    /// Returns the `ElasticInferenceAccelerators` member.
    #[must_use]
    pub fn elastic_inference_accelerators(&self) -> Option<&[ElasticInferenceAccelerator]> {
        self.elastic_inference_accelerators.as_deref()
    }

    /// Sets the `ElasticInferenceAccelerators` member, replacing any previous value.
    pub fn set_elastic_inference_accelerators(
        &mut self,
        elastic_inference_accelerators: Option<Vec<ElasticInferenceAccelerator>>,
    ) {
        self.elastic_inference_accelerators = elastic_inference_accelerators;
    }

    /// Appends to the `ElasticInferenceAccelerators` member and returns the updated value.
    #[must_use]
    pub fn with_elastic_inference_accelerators(
        mut self,
        elastic_inference_accelerators: impl IntoIterator<Item = impl Into<ElasticInferenceAccelerator>>,
    ) -> Self {
        self.elastic_inference_accelerators
            .get_or_insert_with(Vec::new)
            .extend(elastic_inference_accelerators.into_iter().map(Into::into));
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

    /// Returns the `LaunchTemplate` member.
    #[must_use]
    pub fn launch_template(&self) -> Option<&LaunchTemplateSpecification> {
        self.launch_template.as_ref()
    }

    /// Sets the `LaunchTemplate` member, replacing any previous value.
    pub fn set_launch_template(&mut self, launch_template: Option<LaunchTemplateSpecification>) {
        self.launch_template = launch_template;
    }

    /// Sets the `LaunchTemplate` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template(
        mut self,
        launch_template: impl Into<LaunchTemplateSpecification>,
    ) -> Self {
        self.launch_template = Some(launch_template.into());
        self
    }

    /// Returns the `InstanceMarketOptions` member.
    #[must_use]
    pub fn instance_market_options(&self) -> Option<&InstanceMarketOptionsRequest> {
        self.instance_market_options.as_ref()
    }

    /// Sets the `InstanceMarketOptions` member, replacing any previous value.
    pub fn set_instance_market_options(
        &mut self,
        instance_market_options: Option<InstanceMarketOptionsRequest>,
    ) {
        self.instance_market_options = instance_market_options;
    }

    /// Sets the `InstanceMarketOptions` member and returns the updated value.
    #[must_use]
    pub fn with_instance_market_options(
        mut self,
        instance_market_options: impl Into<InstanceMarketOptionsRequest>,
    ) -> Self {
        self.instance_market_options = Some(instance_market_options.into());
        self
    }

    /// Returns the `CreditSpecification` member.
    #[must_use]
    pub fn credit_specification(&self) -> Option<&CreditSpecificationRequest> {
        self.credit_specification.as_ref()
    }

    /// Sets the `CreditSpecification` member, replacing any previous value.
    pub fn set_credit_specification(
        &mut self,
        credit_specification: Option<CreditSpecificationRequest>,
    ) {
        self.credit_specification = credit_specification;
    }

    /// Sets the `CreditSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_credit_specification(
        mut self,
        credit_specification: impl Into<CreditSpecificationRequest>,
    ) -> Self {
        self.credit_specification = Some(credit_specification.into());
        self
    }

    /// Returns the `CpuOptions` member.
    #[must_use]
    pub fn cpu_options(&self) -> Option<&CpuOptionsRequest> {
        self.cpu_options.as_ref()
    }

    /// Sets the `CpuOptions` member, replacing any previous value.
    pub fn set_cpu_options(&mut self, cpu_options: Option<CpuOptionsRequest>) {
        self.cpu_options = cpu_options;
    }

    /// Sets the `CpuOptions` member and returns the updated value.
    #[must_use]
    pub fn with_cpu_options(mut self, cpu_options: impl Into<CpuOptionsRequest>) -> Self {
        self.cpu_options = Some(cpu_options.into());
        self
    }

    /// Returns the `CapacityReservationSpecification` member.
    #[must_use]
    pub fn capacity_reservation_specification(&self) -> Option<&CapacityReservationSpecification> {
        self.capacity_reservation_specification.as_ref()
    }

    /// Sets the `CapacityReservationSpecification` member, replacing any previous value.
    pub fn set_capacity_reservation_specification(
        &mut self,
        capacity_reservation_specification: Option<CapacityReservationSpecification>,
    ) {
        self.capacity_reservation_specification = capacity_reservation_specification;
    }

    /// Sets the `CapacityReservationSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_specification(
        mut self,
        capacity_reservation_specification: impl Into<CapacityReservationSpecification>,
    ) -> Self {
        self.capacity_reservation_specification = Some(capacity_reservation_specification.into());
        self
    }

    /// Returns the `HibernationOptions` member.
    #[must_use]
    pub fn hibernation_options(&self) -> Option<&HibernationOptionsRequest> {
        self.hibernation_options.as_ref()
    }

    /// Sets the `HibernationOptions` member, replacing any previous value.
    pub fn set_hibernation_options(
        &mut self,
        hibernation_options: Option<HibernationOptionsRequest>,
    ) {
        self.hibernation_options = hibernation_options;
    }

    /// Sets the `HibernationOptions` member and returns the updated value.
    #[must_use]
    pub fn with_hibernation_options(
        mut self,
        hibernation_options: impl Into<HibernationOptionsRequest>,
    ) -> Self {
        self.hibernation_options = Some(hibernation_options.into());
        self
    }

    /// Returns the `LicenseSpecifications` member.
    #[must_use]
    pub fn license_specifications(&self) -> Option<&[LicenseConfigurationRequest]> {
        self.license_specifications.as_deref()
    }

    /// Sets the `LicenseSpecifications` member, replacing any previous value.
    pub fn set_license_specifications(
        &mut self,
        license_specifications: Option<Vec<LicenseConfigurationRequest>>,
    ) {
        self.license_specifications = license_specifications;
    }

    /// Appends to the `LicenseSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_license_specifications(
        mut self,
        license_specifications: impl IntoIterator<Item = impl Into<LicenseConfigurationRequest>>,
    ) -> Self {
        self.license_specifications
            .get_or_insert_with(Vec::new)
            .extend(license_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `MetadataOptions` member.
    #[must_use]
    pub fn metadata_options(&self) -> Option<&InstanceMetadataOptionsRequest> {
        self.metadata_options.as_ref()
    }

    /// Sets the `MetadataOptions` member, replacing any previous value.
    pub fn set_metadata_options(
        &mut self,
        metadata_options: Option<InstanceMetadataOptionsRequest>,
    ) {
        self.metadata_options = metadata_options;
    }

    /// Sets the `MetadataOptions` member and returns the updated value.
    #[must_use]
    pub fn with_metadata_options(
        mut self,
        metadata_options: impl Into<InstanceMetadataOptionsRequest>,
    ) -> Self {
        self.metadata_options = Some(metadata_options.into());
        self
    }
}

impl Shape for RunInstancesInput {
    const SHAPE_NAME: &'static str = "RunInstancesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("Ipv6AddressCount", false, self.ipv6_address_count.as_ref()),
            Member::new("Ipv6Addresses", false, self.ipv6_addresses.as_ref()),
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("KeyName", false, self.key_name.as_ref()),
            Member::new("MaxCount", true, self.max_count.as_ref()),
            Member::new("MinCount", true, self.min_count.as_ref()),
            Member::new("Monitoring", false, self.monitoring.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
            Member::new("RamdiskId", false, self.ramdisk_id.as_ref()),
            Member::new("SecurityGroupIds", false, self.security_group_ids.as_ref()),
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("UserData", false, self.user_data.as_ref()),
            Member::new("AdditionalInfo", false, self.additional_info.as_ref()),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new("DisableApiTermination", false, self.disable_api_termination.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("IamInstanceProfile", false, self.iam_instance_profile.as_ref()),
            Member::new(
                "InstanceInitiatedShutdownBehavior",
                false,
                self.instance_initiated_shutdown_behavior.as_ref(),
            ),
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("ElasticGpuSpecification", false, self.elastic_gpu_specification.as_ref()),
            Member::new(
                "ElasticInferenceAccelerators",
                false,
                self.elastic_inference_accelerators.as_ref(),
            ),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
            Member::new("LaunchTemplate", false, self.launch_template.as_ref()),
            Member::new("InstanceMarketOptions", false, self.instance_market_options.as_ref()),
            Member::new("CreditSpecification", false, self.credit_specification.as_ref()),
            Member::new("CpuOptions", false, self.cpu_options.as_ref()),
            Member::new(
                "CapacityReservationSpecification",
                false,
                self.capacity_reservation_specification.as_ref(),
            ),
            Member::new("HibernationOptions", false, self.hibernation_options.as_ref()),
            Member::new("LicenseSpecifications", false, self.license_specifications.as_ref()),
            Member::new("MetadataOptions", false, self.metadata_options.as_ref()),
        ]
    }
}

impl fmt::Display for RunInstancesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for RunInstancesInput {
    type Output = RunInstancesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::RunInstances;
}

