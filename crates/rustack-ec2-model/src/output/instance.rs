//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Member, Shape, render};
use crate::types::{
    CapacityReservation, FleetData, InstanceTypeInfo, LaunchTemplate, Reservation,
    ReservedInstances, ReservedInstancesOffering, ResponseLaunchTemplateData,
    SpotFleetRequestConfig, SpotInstanceRequest,
};

/// EC2 CreateCapacityReservationOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateCapacityReservationOutput {
    /// Information about the Capacity Reservation.
    #[serde(rename = "CapacityReservation", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation: Option<CapacityReservation>,
}

impl CreateCapacityReservationOutput {
    /// Returns the `CapacityReservation` member.
    #[must_use]
    pub fn capacity_reservation(&self) -> Option<&CapacityReservation> {
        self.capacity_reservation.as_ref()
    }

    /// Sets the `CapacityReservation` member, replacing any previous value.
    pub fn set_capacity_reservation(&mut self, capacity_reservation: Option<CapacityReservation>) {
        self.capacity_reservation = capacity_reservation;
    }

    /// Sets the `CapacityReservation` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation(
        mut self,
        capacity_reservation: impl Into<CapacityReservation>,
    ) -> Self {
        self.capacity_reservation = Some(capacity_reservation.into());
        self
    }
}

impl Shape for CreateCapacityReservationOutput {
    const SHAPE_NAME: &'static str = "CreateCapacityReservationResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CapacityReservation", false, self.capacity_reservation.as_ref()),
        ]
    }
}

impl fmt::Display for CreateCapacityReservationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CreateLaunchTemplateOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateLaunchTemplateOutput {
    /// Information about the launch template.
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplate>,
}

impl CreateLaunchTemplateOutput {
    /// Returns the `LaunchTemplate` member.
    #[must_use]
    pub fn launch_template(&self) -> Option<&LaunchTemplate> {
        self.launch_template.as_ref()
    }

    /// Sets the `LaunchTemplate` member, replacing any previous value.
    pub fn set_launch_template(&mut self, launch_template: Option<LaunchTemplate>) {
        self.launch_template = launch_template;
    }

    /// Sets the `LaunchTemplate` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template(mut self, launch_template: impl Into<LaunchTemplate>) -> Self {
        self.launch_template = Some(launch_template.into());
        self
    }
}

impl Shape for CreateLaunchTemplateOutput {
    const SHAPE_NAME: &'static str = "CreateLaunchTemplateResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LaunchTemplate", false, self.launch_template.as_ref()),
        ]
    }
}

impl fmt::Display for CreateLaunchTemplateOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeCapacityReservationsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeCapacityReservationsOutput {
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "CapacityReservations", skip_serializing_if = "Option::is_none")]
    pub capacity_reservations: Option<Vec<CapacityReservation>>,
}

impl DescribeCapacityReservationsOutput {
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

    /// Returns the `CapacityReservations` member.
    #[must_use]
    pub fn capacity_reservations(&self) -> Option<&[CapacityReservation]> {
        self.capacity_reservations.as_deref()
    }

    /// Sets the `CapacityReservations` member, replacing any previous value.
    pub fn set_capacity_reservations(
        &mut self,
        capacity_reservations: Option<Vec<CapacityReservation>>,
    ) {
        self.capacity_reservations = capacity_reservations;
    }

    /// Appends to the `CapacityReservations` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservations(
        mut self,
        capacity_reservations: impl IntoIterator<Item = impl Into<CapacityReservation>>,
    ) -> Self {
        self.capacity_reservations
            .get_or_insert_with(Vec::new)
            .extend(capacity_reservations.into_iter().map(Into::into));
        self
    }
}

impl Shape for DescribeCapacityReservationsOutput {
    const SHAPE_NAME: &'static str = "DescribeCapacityReservationsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("CapacityReservations", false, self.capacity_reservations.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeCapacityReservationsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeFleetsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeFleetsOutput {
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Information about the EC2 Fleets.
    #[serde(rename = "Fleets", skip_serializing_if = "Option::is_none")]
    pub fleets: Option<Vec<FleetData>>,
}

impl DescribeFleetsOutput {
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

    /// Returns the `Fleets` member.
    #[must_use]
    pub fn fleets(&self) -> Option<&[FleetData]> {
        self.fleets.as_deref()
    }

    /// Sets the `Fleets` member, replacing any previous value.
    pub fn set_fleets(&mut self, fleets: Option<Vec<FleetData>>) {
        self.fleets = fleets;
    }

    /// Appends to the `Fleets` member and returns the updated value.
    #[must_use]
    pub fn with_fleets(mut self, fleets: impl IntoIterator<Item = impl Into<FleetData>>) -> Self {
        self.fleets
            .get_or_insert_with(Vec::new)
            .extend(fleets.into_iter().map(Into::into));
        self
    }
}

impl Shape for DescribeFleetsOutput {
    const SHAPE_NAME: &'static str = "DescribeFleetsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("Fleets", false, self.fleets.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeFleetsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeInstanceTypesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeInstanceTypesOutput {
    /// The instance type.
    #[serde(rename = "InstanceTypes", skip_serializing_if = "Option::is_none")]
    pub instance_types: Option<Vec<InstanceTypeInfo>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInstanceTypesOutput {
    /// Returns the `InstanceTypes` member.
    #[must_use]
    pub fn instance_types(&self) -> Option<&[InstanceTypeInfo]> {
        self.instance_types.as_deref()
    }

    /// Sets the `InstanceTypes` member, replacing any previous value.
    pub fn set_instance_types(&mut self, instance_types: Option<Vec<InstanceTypeInfo>>) {
        self.instance_types = instance_types;
    }

    /// Appends to the `InstanceTypes` member and returns the updated value.
    #[must_use]
    pub fn with_instance_types(
        mut self,
        instance_types: impl IntoIterator<Item = impl Into<InstanceTypeInfo>>,
    ) -> Self {
        self.instance_types
            .get_or_insert_with(Vec::new)
            .extend(instance_types.into_iter().map(Into::into));
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

impl Shape for DescribeInstanceTypesOutput {
    const SHAPE_NAME: &'static str = "DescribeInstanceTypesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("InstanceTypes", false, self.instance_types.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeInstanceTypesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeInstancesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeInstancesOutput {
    /// Information about the reservations.
    #[serde(rename = "Reservations", skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInstancesOutput {
    /// Returns the `Reservations` member.
    #[must_use]
    pub fn reservations(&self) -> Option<&[Reservation]> {
        self.reservations.as_deref()
    }

    /// Sets the `Reservations` member, replacing any previous value.
    pub fn set_reservations(&mut self, reservations: Option<Vec<Reservation>>) {
        self.reservations = reservations;
    }

    /// Appends to the `Reservations` member and returns the updated value.
    #[must_use]
    pub fn with_reservations(
        mut self,
        reservations: impl IntoIterator<Item = impl Into<Reservation>>,
    ) -> Self {
        self.reservations
            .get_or_insert_with(Vec::new)
            .extend(reservations.into_iter().map(Into::into));
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

impl Shape for DescribeInstancesOutput {
    const SHAPE_NAME: &'static str = "DescribeInstancesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Reservations", false, self.reservations.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeInstancesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeReservedInstancesOfferingsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeReservedInstancesOfferingsOutput {
    #[serde(rename = "ReservedInstancesOfferings", skip_serializing_if = "Option::is_none")]
    pub reserved_instances_offerings: Option<Vec<ReservedInstancesOffering>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeReservedInstancesOfferingsOutput {
    /// Returns the `ReservedInstancesOfferings` member.
    #[must_use]
    pub fn reserved_instances_offerings(&self) -> Option<&[ReservedInstancesOffering]> {
        self.reserved_instances_offerings.as_deref()
    }

    /// Sets the `ReservedInstancesOfferings` member, replacing any previous value.
    pub fn set_reserved_instances_offerings(
        &mut self,
        reserved_instances_offerings: Option<Vec<ReservedInstancesOffering>>,
    ) {
        self.reserved_instances_offerings = reserved_instances_offerings;
    }

    /// Appends to the `ReservedInstancesOfferings` member and returns the updated value.
    #[must_use]
    pub fn with_reserved_instances_offerings(
        mut self,
        reserved_instances_offerings: impl IntoIterator<Item = impl Into<ReservedInstancesOffering>>,
    ) -> Self {
        self.reserved_instances_offerings
            .get_or_insert_with(Vec::new)
            .extend(reserved_instances_offerings.into_iter().map(Into::into));
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

impl Shape for DescribeReservedInstancesOfferingsOutput {
    const SHAPE_NAME: &'static str = "DescribeReservedInstancesOfferingsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "ReservedInstancesOfferings",
                false,
                self.reserved_instances_offerings.as_ref(),
            ),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeReservedInstancesOfferingsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeReservedInstancesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeReservedInstancesOutput {
    /// A list of Reserved Instances.
    #[serde(rename = "ReservedInstances", skip_serializing_if = "Option::is_none")]
    pub reserved_instances: Option<Vec<ReservedInstances>>,
}

impl DescribeReservedInstancesOutput {
    /// Returns the `ReservedInstances` member.
    #[must_use]
    pub fn reserved_instances(&self) -> Option<&[ReservedInstances]> {
        self.reserved_instances.as_deref()
    }

    /// Sets the `ReservedInstances` member, replacing any previous value.
    pub fn set_reserved_instances(&mut self, reserved_instances: Option<Vec<ReservedInstances>>) {
        self.reserved_instances = reserved_instances;
    }

    /// Appends to the `ReservedInstances` member and returns the updated value.
    #[must_use]
    pub fn with_reserved_instances(
        mut self,
        reserved_instances: impl IntoIterator<Item = impl Into<ReservedInstances>>,
    ) -> Self {
        self.reserved_instances
            .get_or_insert_with(Vec::new)
            .extend(reserved_instances.into_iter().map(Into::into));
        self
    }
}

impl Shape for DescribeReservedInstancesOutput {
    const SHAPE_NAME: &'static str = "DescribeReservedInstancesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ReservedInstances", false, self.reserved_instances.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeReservedInstancesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeSpotFleetRequestsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeSpotFleetRequestsOutput {
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Information about the configuration of your Spot Fleet.
    #[serde(rename = "SpotFleetRequestConfigs", skip_serializing_if = "Option::is_none")]
    pub spot_fleet_request_configs: Option<Vec<SpotFleetRequestConfig>>,
}

impl DescribeSpotFleetRequestsOutput {
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

    /// Returns the `SpotFleetRequestConfigs` member.
    #[must_use]
    pub fn spot_fleet_request_configs(&self) -> Option<&[SpotFleetRequestConfig]> {
        self.spot_fleet_request_configs.as_deref()
    }

    /// Sets the `SpotFleetRequestConfigs` member, replacing any previous value.
    pub fn set_spot_fleet_request_configs(
        &mut self,
        spot_fleet_request_configs: Option<Vec<SpotFleetRequestConfig>>,
    ) {
        self.spot_fleet_request_configs = spot_fleet_request_configs;
    }

    /// Appends to the `SpotFleetRequestConfigs` member and returns the updated value.
    #[must_use]
    pub fn with_spot_fleet_request_configs(
        mut self,
        spot_fleet_request_configs: impl IntoIterator<Item = impl Into<SpotFleetRequestConfig>>,
    ) -> Self {
        self.spot_fleet_request_configs
            .get_or_insert_with(Vec::new)
            .extend(spot_fleet_request_configs.into_iter().map(Into::into));
        self
    }
}

impl Shape for DescribeSpotFleetRequestsOutput {
    const SHAPE_NAME: &'static str = "DescribeSpotFleetRequestsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("SpotFleetRequestConfigs", false, self.spot_fleet_request_configs.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeSpotFleetRequestsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeSpotInstanceRequestsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeSpotInstanceRequestsOutput {
    /// One or more Spot Instance requests.
    #[serde(rename = "SpotInstanceRequests", skip_serializing_if = "Option::is_none")]
    pub spot_instance_requests: Option<Vec<SpotInstanceRequest>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeSpotInstanceRequestsOutput {
    /// Returns the `SpotInstanceRequests` member.
    #[must_use]
    pub fn spot_instance_requests(&self) -> Option<&[SpotInstanceRequest]> {
        self.spot_instance_requests.as_deref()
    }

    /// Sets the `SpotInstanceRequests` member, replacing any previous value.
    pub fn set_spot_instance_requests(
        &mut self,
        spot_instance_requests: Option<Vec<SpotInstanceRequest>>,
    ) {
        self.spot_instance_requests = spot_instance_requests;
    }

    /// Appends to the `SpotInstanceRequests` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_requests(
        mut self,
        spot_instance_requests: impl IntoIterator<Item = impl Into<SpotInstanceRequest>>,
    ) -> Self {
        self.spot_instance_requests
            .get_or_insert_with(Vec::new)
            .extend(spot_instance_requests.into_iter().map(Into::into));
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

impl Shape for DescribeSpotInstanceRequestsOutput {
    const SHAPE_NAME: &'static str = "DescribeSpotInstanceRequestsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SpotInstanceRequests", false, self.spot_instance_requests.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeSpotInstanceRequestsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 GetLaunchTemplateDataOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetLaunchTemplateDataOutput {
    /// The instance data.
    #[serde(rename = "LaunchTemplateData", skip_serializing_if = "Option::is_none")]
    pub launch_template_data: Option<ResponseLaunchTemplateData>,
}

impl GetLaunchTemplateDataOutput {
    /// Returns the `LaunchTemplateData` member.
    #[must_use]
    pub fn launch_template_data(&self) -> Option<&ResponseLaunchTemplateData> {
        self.launch_template_data.as_ref()
    }

    /// Sets the `LaunchTemplateData` member, replacing any previous value.
    pub fn set_launch_template_data(
        &mut self,
        launch_template_data: Option<ResponseLaunchTemplateData>,
    ) {
        self.launch_template_data = launch_template_data;
    }

    /// Sets the `LaunchTemplateData` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_data(
        mut self,
        launch_template_data: impl Into<ResponseLaunchTemplateData>,
    ) -> Self {
        self.launch_template_data = Some(launch_template_data.into());
        self
    }
}

impl Shape for GetLaunchTemplateDataOutput {
    const SHAPE_NAME: &'static str = "GetLaunchTemplateDataResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LaunchTemplateData", false, self.launch_template_data.as_ref()),
        ]
    }
}

impl fmt::Display for GetLaunchTemplateDataOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RunInstancesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunInstancesOutput {
    /// Information about the launched instances.
    #[serde(rename = "Reservation", skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
}

impl RunInstancesOutput {
    /// Returns the `Reservation` member.
    #[must_use]
    pub fn reservation(&self) -> Option<&Reservation> {
        self.reservation.as_ref()
    }

    /// Sets the `Reservation` member, replacing any previous value.
    pub fn set_reservation(&mut self, reservation: Option<Reservation>) {
        self.reservation = reservation;
    }

    /// Sets the `Reservation` member and returns the updated value.
    #[must_use]
    pub fn with_reservation(mut self, reservation: impl Into<Reservation>) -> Self {
        self.reservation = Some(reservation.into());
        self
    }
}

impl Shape for RunInstancesOutput {
    const SHAPE_NAME: &'static str = "RunInstancesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Reservation", false, self.reservation.as_ref()),
        ]
    }
}

impl fmt::Display for RunInstancesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

