//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operations::Ec2Operation;
use crate::output::{
    CreateFlowLogsOutput, CreateRouteOutput, CreateVpnConnectionOutput,
    DescribeInternetGatewaysOutput, DescribeNetworkInterfacesOutput, DescribeRouteTablesOutput,
    DescribeSecurityGroupsOutput,
};
use crate::request::Ec2Request;
use crate::shape::{Member, Shape, render};
use crate::types::{
    Filter, FlowLogsResourceType, LogDestinationType, TagSpecification, TrafficType,
    VpnConnectionOptionsSpecification,
};

/// EC2 CreateFlowLogsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateFlowLogsInput {
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Unique, case-sensitive identifier to ensure the idempotency of the request.
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "DeliverLogsPermissionArn", skip_serializing_if = "Option::is_none")]
    pub deliver_logs_permission_arn: Option<String>,
    #[serde(rename = "LogGroupName", skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<String>,
    /// The ID of the subnet, network interface, or VPC.
    #[serde(rename = "ResourceIds", skip_serializing_if = "Option::is_none")]
    pub resource_ids: Option<Vec<String>>,
    /// The type of resource for which to create the flow log.
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<FlowLogsResourceType>,
    /// The type of traffic to log.
    #[serde(rename = "TrafficType", skip_serializing_if = "Option::is_none")]
    pub traffic_type: Option<TrafficType>,
    #[serde(rename = "LogDestinationType", skip_serializing_if = "Option::is_none")]
    pub log_destination_type: Option<LogDestinationType>,
    #[serde(rename = "LogDestination", skip_serializing_if = "Option::is_none")]
    pub log_destination: Option<String>,
    #[serde(rename = "LogFormat", skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
    /// The maximum interval of time, in seconds, during which a flow of packets is captured.
    #[serde(rename = "MaxAggregationInterval", skip_serializing_if = "Option::is_none")]
    pub max_aggregation_interval: Option<i32>,
}

impl CreateFlowLogsInput {
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

    /// Returns the `DeliverLogsPermissionArn` member.
    #[must_use]
    pub fn deliver_logs_permission_arn(&self) -> Option<&str> {
        self.deliver_logs_permission_arn.as_deref()
    }

    /// Sets the `DeliverLogsPermissionArn` member, replacing any previous value.
    pub fn set_deliver_logs_permission_arn(&mut self, deliver_logs_permission_arn: Option<String>) {
        self.deliver_logs_permission_arn = deliver_logs_permission_arn;
    }

    /// Sets the `DeliverLogsPermissionArn` member and returns the updated value.
    #[must_use]
    pub fn with_deliver_logs_permission_arn(
        mut self,
        deliver_logs_permission_arn: impl Into<String>,
    ) -> Self {
        self.deliver_logs_permission_arn = Some(deliver_logs_permission_arn.into());
        self
    }

    /// Returns the `LogGroupName` member.
    #[must_use]
    pub fn log_group_name(&self) -> Option<&str> {
        self.log_group_name.as_deref()
    }

    /// Sets the `LogGroupName` member, replacing any previous value.
    pub fn set_log_group_name(&mut self, log_group_name: Option<String>) {
        self.log_group_name = log_group_name;
    }

    /// Sets the `LogGroupName` member and returns the updated value.
    #[must_use]
    pub fn with_log_group_name(mut self, log_group_name: impl Into<String>) -> Self {
        self.log_group_name = Some(log_group_name.into());
        self
    }

    /// Returns the `ResourceIds` member.
    #[must_use]
    pub fn resource_ids(&self) -> Option<&[String]> {
        self.resource_ids.as_deref()
    }

    /// Sets the `ResourceIds` member, replacing any previous value.
    pub fn set_resource_ids(&mut self, resource_ids: Option<Vec<String>>) {
        self.resource_ids = resource_ids;
    }

    /// Appends to the `ResourceIds` member and returns the updated value.
    #[must_use]
    pub fn with_resource_ids(
        mut self,
        resource_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.resource_ids
            .get_or_insert_with(Vec::new)
            .extend(resource_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `ResourceType` member.
    #[must_use]
    pub fn resource_type(&self) -> Option<&FlowLogsResourceType> {
        self.resource_type.as_ref()
    }

    /// Sets the `ResourceType` member, replacing any previous value.
    pub fn set_resource_type(&mut self, resource_type: Option<FlowLogsResourceType>) {
        self.resource_type = resource_type;
    }

    /// Sets the `ResourceType` member and returns the updated value.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: impl Into<FlowLogsResourceType>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Returns the `TrafficType` member.
    #[must_use]
    pub fn traffic_type(&self) -> Option<&TrafficType> {
        self.traffic_type.as_ref()
    }

    /// Sets the `TrafficType` member, replacing any previous value.
    pub fn set_traffic_type(&mut self, traffic_type: Option<TrafficType>) {
        self.traffic_type = traffic_type;
    }

    /// Sets the `TrafficType` member and returns the updated value.
    #[must_use]
    pub fn with_traffic_type(mut self, traffic_type: impl Into<TrafficType>) -> Self {
        self.traffic_type = Some(traffic_type.into());
        self
    }

    /// Returns the `LogDestinationType` member.
    #[must_use]
    pub fn log_destination_type(&self) -> Option<&LogDestinationType> {
        self.log_destination_type.as_ref()
    }

    /// Sets the `LogDestinationType` member, replacing any previous value.
    pub fn set_log_destination_type(&mut self, log_destination_type: Option<LogDestinationType>) {
        self.log_destination_type = log_destination_type;
    }

    /// Sets the `LogDestinationType` member and returns the updated value.
    #[must_use]
    pub fn with_log_destination_type(
        mut self,
        log_destination_type: impl Into<LogDestinationType>,
    ) -> Self {
        self.log_destination_type = Some(log_destination_type.into());
        self
    }

    /// Returns the `LogDestination` member.
    #[must_use]
    pub fn log_destination(&self) -> Option<&str> {
        self.log_destination.as_deref()
    }

    /// Sets the `LogDestination` member, replacing any previous value.
    pub fn set_log_destination(&mut self, log_destination: Option<String>) {
        self.log_destination = log_destination;
    }

    /// Sets the `LogDestination` member and returns the updated value.
    #[must_use]
    pub fn with_log_destination(mut self, log_destination: impl Into<String>) -> Self {
        self.log_destination = Some(log_destination.into());
        self
    }

    /// Returns the `LogFormat` member.
    #[must_use]
    pub fn log_format(&self) -> Option<&str> {
        self.log_format.as_deref()
    }

    /// Sets the `LogFormat` member, replacing any previous value.
    pub fn set_log_format(&mut self, log_format: Option<String>) {
        self.log_format = log_format;
    }

    /// Sets the `LogFormat` member and returns the updated value.
    #[must_use]
    pub fn with_log_format(mut self, log_format: impl Into<String>) -> Self {
        self.log_format = Some(log_format.into());
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

    /// Returns the `MaxAggregationInterval` member.
    #[must_use]
    pub fn max_aggregation_interval(&self) -> Option<i32> {
        self.max_aggregation_interval
    }

    /// Sets the `MaxAggregationInterval` member, replacing any previous value.
    pub fn set_max_aggregation_interval(&mut self, max_aggregation_interval: Option<i32>) {
        self.max_aggregation_interval = max_aggregation_interval;
    }

    /// Sets the `MaxAggregationInterval` member and returns the updated value.
    #[must_use]
    pub fn with_max_aggregation_interval(
        mut self,
        max_aggregation_interval: impl Into<i32>,
    ) -> Self {
        self.max_aggregation_interval = Some(max_aggregation_interval.into());
        self
    }
}

impl Shape for CreateFlowLogsInput {
    const SHAPE_NAME: &'static str = "CreateFlowLogsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new(
                "DeliverLogsPermissionArn",
                false,
                self.deliver_logs_permission_arn.as_ref(),
            ),
            Member::new("LogGroupName", false, self.log_group_name.as_ref()),
            Member::new("ResourceIds", true, self.resource_ids.as_ref()),
            Member::new("ResourceType", true, self.resource_type.as_ref()),
            Member::new("TrafficType", true, self.traffic_type.as_ref()),
            Member::new("LogDestinationType", false, self.log_destination_type.as_ref()),
            Member::new("LogDestination", false, self.log_destination.as_ref()),
            Member::new("LogFormat", false, self.log_format.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
            Member::new("MaxAggregationInterval", false, self.max_aggregation_interval.as_ref()),
        ]
    }
}

impl fmt::Display for CreateFlowLogsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for CreateFlowLogsInput {
    type Output = CreateFlowLogsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::CreateFlowLogs;
}

/// EC2 CreateRouteInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRouteInput {
    /// The IPv4 CIDR address block used for the destination match.
    #[serde(rename = "DestinationCidrBlock", skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    /// The IPv6 CIDR block used for the destination match.
    #[serde(rename = "DestinationIpv6CidrBlock", skip_serializing_if = "Option::is_none")]
    pub destination_ipv6_cidr_block: Option<String>,
    /// The ID of a prefix list used for the destination match.
    #[serde(rename = "DestinationPrefixListId", skip_serializing_if = "Option::is_none")]
    pub destination_prefix_list_id: Option<String>,
    /// Checks whether you have the required permissions for the action.
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "VpcEndpointId", skip_serializing_if = "Option::is_none")]
    pub vpc_endpoint_id: Option<String>,
    #[serde(rename = "EgressOnlyInternetGatewayId", skip_serializing_if = "Option::is_none")]
    pub egress_only_internet_gateway_id: Option<String>,
    /// The ID of an internet gateway or virtual private gateway.
    #[serde(rename = "GatewayId", skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "NatGatewayId", skip_serializing_if = "Option::is_none")]
    pub nat_gateway_id: Option<String>,
    #[serde(rename = "TransitGatewayId", skip_serializing_if = "Option::is_none")]
    pub transit_gateway_id: Option<String>,
    #[serde(rename = "LocalGatewayId", skip_serializing_if = "Option::is_none")]
    pub local_gateway_id: Option<String>,
    #[serde(rename = "CarrierGatewayId", skip_serializing_if = "Option::is_none")]
    pub carrier_gateway_id: Option<String>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    /// The ID of the route table for the route.
    #[serde(rename = "RouteTableId", skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    #[serde(rename = "VpcPeeringConnectionId", skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

impl CreateRouteInput {
    /// Returns the `DestinationCidrBlock` member.
    #[must_use]
    pub fn destination_cidr_block(&self) -> Option<&str> {
        self.destination_cidr_block.as_deref()
    }

    /// Sets the `DestinationCidrBlock` member, replacing any previous value.
    pub fn set_destination_cidr_block(&mut self, destination_cidr_block: Option<String>) {
        self.destination_cidr_block = destination_cidr_block;
    }

    /// Sets the `DestinationCidrBlock` member and returns the updated value.
    #[must_use]
    pub fn with_destination_cidr_block(
        mut self,
        destination_cidr_block: impl Into<String>,
    ) -> Self {
        self.destination_cidr_block = Some(destination_cidr_block.into());
        self
    }

    /// Returns the `DestinationIpv6CidrBlock` member.
    #[must_use]
    pub fn destination_ipv6_cidr_block(&self) -> Option<&str> {
        self.destination_ipv6_cidr_block.as_deref()
    }

    /// Sets the `DestinationIpv6CidrBlock` member, replacing any previous value.
    pub fn set_destination_ipv6_cidr_block(&mut self, destination_ipv6_cidr_block: Option<String>) {
        self.destination_ipv6_cidr_block = destination_ipv6_cidr_block;
    }

    /// Sets the `DestinationIpv6CidrBlock` member and returns the updated value.
    #[must_use]
    pub fn with_destination_ipv6_cidr_block(
        mut self,
        destination_ipv6_cidr_block: impl Into<String>,
    ) -> Self {
        self.destination_ipv6_cidr_block = Some(destination_ipv6_cidr_block.into());
        self
    }

    /// Returns the `DestinationPrefixListId` member.
    #[must_use]
    pub fn destination_prefix_list_id(&self) -> Option<&str> {
        self.destination_prefix_list_id.as_deref()
    }

    /// Sets the `DestinationPrefixListId` member, replacing any previous value.
    pub fn set_destination_prefix_list_id(&mut self, destination_prefix_list_id: Option<String>) {
        self.destination_prefix_list_id = destination_prefix_list_id;
    }

    /// Sets the `DestinationPrefixListId` member and returns the updated value.
    #[must_use]
    pub fn with_destination_prefix_list_id(
        mut self,
        destination_prefix_list_id: impl Into<String>,
    ) -> Self {
        self.destination_prefix_list_id = Some(destination_prefix_list_id.into());
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

    /// Returns the `VpcEndpointId` member.
    #[must_use]
    pub fn vpc_endpoint_id(&self) -> Option<&str> {
        self.vpc_endpoint_id.as_deref()
    }

    /// Sets the `VpcEndpointId` member, replacing any previous value.
    pub fn set_vpc_endpoint_id(&mut self, vpc_endpoint_id: Option<String>) {
        self.vpc_endpoint_id = vpc_endpoint_id;
    }

    /// Sets the `VpcEndpointId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_endpoint_id(mut self, vpc_endpoint_id: impl Into<String>) -> Self {
        self.vpc_endpoint_id = Some(vpc_endpoint_id.into());
        self
    }

    /// Returns the `EgressOnlyInternetGatewayId` member.
    #[must_use]
    pub fn egress_only_internet_gateway_id(&self) -> Option<&str> {
        self.egress_only_internet_gateway_id.as_deref()
    }

    /// Sets the `EgressOnlyInternetGatewayId` member, replacing any previous value.
    pub fn set_egress_only_internet_gateway_id(
        &mut self,
        egress_only_internet_gateway_id: Option<String>,
    ) {
        self.egress_only_internet_gateway_id = egress_only_internet_gateway_id;
    }

    /// Sets the `EgressOnlyInternetGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_egress_only_internet_gateway_id(
        mut self,
        egress_only_internet_gateway_id: impl Into<String>,
    ) -> Self {
        self.egress_only_internet_gateway_id = Some(egress_only_internet_gateway_id.into());
        self
    }

    /// Returns the `GatewayId` member.
    #[must_use]
    pub fn gateway_id(&self) -> Option<&str> {
        self.gateway_id.as_deref()
    }

    /// Sets the `GatewayId` member, replacing any previous value.
    pub fn set_gateway_id(&mut self, gateway_id: Option<String>) {
        self.gateway_id = gateway_id;
    }

    /// Sets the `GatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_gateway_id(mut self, gateway_id: impl Into<String>) -> Self {
        self.gateway_id = Some(gateway_id.into());
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

    /// Returns the `NatGatewayId` member.
    #[must_use]
    pub fn nat_gateway_id(&self) -> Option<&str> {
        self.nat_gateway_id.as_deref()
    }

    /// Sets the `NatGatewayId` member, replacing any previous value.
    pub fn set_nat_gateway_id(&mut self, nat_gateway_id: Option<String>) {
        self.nat_gateway_id = nat_gateway_id;
    }

    /// Sets the `NatGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_nat_gateway_id(mut self, nat_gateway_id: impl Into<String>) -> Self {
        self.nat_gateway_id = Some(nat_gateway_id.into());
        self
    }

    /// Returns the `TransitGatewayId` member.
    #[must_use]
    pub fn transit_gateway_id(&self) -> Option<&str> {
        self.transit_gateway_id.as_deref()
    }

    /// Sets the `TransitGatewayId` member, replacing any previous value.
    pub fn set_transit_gateway_id(&mut self, transit_gateway_id: Option<String>) {
        self.transit_gateway_id = transit_gateway_id;
    }

    /// Sets the `TransitGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_transit_gateway_id(mut self, transit_gateway_id: impl Into<String>) -> Self {
        self.transit_gateway_id = Some(transit_gateway_id.into());
        self
    }

    /// Returns the `LocalGatewayId` member.
    #[must_use]
    pub fn local_gateway_id(&self) -> Option<&str> {
        self.local_gateway_id.as_deref()
    }

    /// Sets the `LocalGatewayId` member, replacing any previous value.
    pub fn set_local_gateway_id(&mut self, local_gateway_id: Option<String>) {
        self.local_gateway_id = local_gateway_id;
    }

    /// Sets the `LocalGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_local_gateway_id(mut self, local_gateway_id: impl Into<String>) -> Self {
        self.local_gateway_id = Some(local_gateway_id.into());
        self
    }

    /// Returns the `CarrierGatewayId` member.
    #[must_use]
    pub fn carrier_gateway_id(&self) -> Option<&str> {
        self.carrier_gateway_id.as_deref()
    }

    /// Sets the `CarrierGatewayId` member, replacing any previous value.
    pub fn set_carrier_gateway_id(&mut self, carrier_gateway_id: Option<String>) {
        self.carrier_gateway_id = carrier_gateway_id;
    }

    /// Sets the `CarrierGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_carrier_gateway_id(mut self, carrier_gateway_id: impl Into<String>) -> Self {
        self.carrier_gateway_id = Some(carrier_gateway_id.into());
        self
    }

    /// Returns the `NetworkInterfaceId` member.
    #[must_use]
    pub fn network_interface_id(&self) -> Option<&str> {
        self.network_interface_id.as_deref()
    }

    /// Sets the `NetworkInterfaceId` member, replacing any previous value.
    pub fn set_network_interface_id(&mut self, network_interface_id: Option<String>) {
        self.network_interface_id = network_interface_id;
    }

    /// Sets the `NetworkInterfaceId` member and returns the updated value.
    #[must_use]
    pub fn with_network_interface_id(mut self, network_interface_id: impl Into<String>) -> Self {
        self.network_interface_id = Some(network_interface_id.into());
        self
    }

    /// Returns the `RouteTableId` member.
    #[must_use]
    pub fn route_table_id(&self) -> Option<&str> {
        self.route_table_id.as_deref()
    }

    /// Sets the `RouteTableId` member, replacing any previous value.
    pub fn set_route_table_id(&mut self, route_table_id: Option<String>) {
        self.route_table_id = route_table_id;
    }

    /// Sets the `RouteTableId` member and returns the updated value.
    #[must_use]
    pub fn with_route_table_id(mut self, route_table_id: impl Into<String>) -> Self {
        self.route_table_id = Some(route_table_id.into());
        self
    }

    /// Returns the `VpcPeeringConnectionId` member.
    #[must_use]
    pub fn vpc_peering_connection_id(&self) -> Option<&str> {
        self.vpc_peering_connection_id.as_deref()
    }

    /// Sets the `VpcPeeringConnectionId` member, replacing any previous value.
    pub fn set_vpc_peering_connection_id(&mut self, vpc_peering_connection_id: Option<String>) {
        self.vpc_peering_connection_id = vpc_peering_connection_id;
    }

    /// Sets the `VpcPeeringConnectionId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_peering_connection_id(
        mut self,
        vpc_peering_connection_id: impl Into<String>,
    ) -> Self {
        self.vpc_peering_connection_id = Some(vpc_peering_connection_id.into());
        self
    }
}

impl Shape for CreateRouteInput {
    const SHAPE_NAME: &'static str = "CreateRouteRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DestinationCidrBlock", false, self.destination_cidr_block.as_ref()),
            Member::new(
                "DestinationIpv6CidrBlock",
                false,
                self.destination_ipv6_cidr_block.as_ref(),
            ),
            Member::new("DestinationPrefixListId", false, self.destination_prefix_list_id.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("VpcEndpointId", false, self.vpc_endpoint_id.as_ref()),
            Member::new(
                "EgressOnlyInternetGatewayId",
                false,
                self.egress_only_internet_gateway_id.as_ref(),
            ),
            Member::new("GatewayId", false, self.gateway_id.as_ref()),
            Member::new("InstanceId", false, self.instance_id.as_ref()),
            Member::new("NatGatewayId", false, self.nat_gateway_id.as_ref()),
            Member::new("TransitGatewayId", false, self.transit_gateway_id.as_ref()),
            Member::new("LocalGatewayId", false, self.local_gateway_id.as_ref()),
            Member::new("CarrierGatewayId", false, self.carrier_gateway_id.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("RouteTableId", true, self.route_table_id.as_ref()),
            Member::new("VpcPeeringConnectionId", false, self.vpc_peering_connection_id.as_ref()),
        ]
    }
}

impl fmt::Display for CreateRouteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for CreateRouteInput {
    type Output = CreateRouteOutput;

    const OPERATION: Ec2Operation = Ec2Operation::CreateRoute;
}

/// EC2 CreateVpnConnectionInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateVpnConnectionInput {
    /// The ID of the customer gateway.
    #[serde(rename = "CustomerGatewayId", skip_serializing_if = "Option::is_none")]
    pub customer_gateway_id: Option<String>,
    /// The type of VPN connection (`ipsec.1`).
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(rename = "VpnGatewayId", skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
    #[serde(rename = "TransitGatewayId", skip_serializing_if = "Option::is_none")]
    pub transit_gateway_id: Option<String>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// The options for the VPN connection.
    #[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
    pub options: Option<VpnConnectionOptionsSpecification>,
}

impl CreateVpnConnectionInput {
    /// Returns the `CustomerGatewayId` member.
    #[must_use]
    pub fn customer_gateway_id(&self) -> Option<&str> {
        self.customer_gateway_id.as_deref()
    }

    /// Sets the `CustomerGatewayId` member, replacing any previous value.
    pub fn set_customer_gateway_id(&mut self, customer_gateway_id: Option<String>) {
        self.customer_gateway_id = customer_gateway_id;
    }

    /// Sets the `CustomerGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_customer_gateway_id(mut self, customer_gateway_id: impl Into<String>) -> Self {
        self.customer_gateway_id = Some(customer_gateway_id.into());
        self
    }

    /// Returns the `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }

    /// Sets the `Type` member, replacing any previous value.
    pub fn set_type(&mut self, r#type: Option<String>) {
        self.r#type = r#type;
    }

    /// Sets the `Type` member and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<String>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Returns the `VpnGatewayId` member.
    #[must_use]
    pub fn vpn_gateway_id(&self) -> Option<&str> {
        self.vpn_gateway_id.as_deref()
    }

    /// Sets the `VpnGatewayId` member, replacing any previous value.
    pub fn set_vpn_gateway_id(&mut self, vpn_gateway_id: Option<String>) {
        self.vpn_gateway_id = vpn_gateway_id;
    }

    /// Sets the `VpnGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_vpn_gateway_id(mut self, vpn_gateway_id: impl Into<String>) -> Self {
        self.vpn_gateway_id = Some(vpn_gateway_id.into());
        self
    }

    /// Returns the `TransitGatewayId` member.
    #[must_use]
    pub fn transit_gateway_id(&self) -> Option<&str> {
        self.transit_gateway_id.as_deref()
    }

    /// Sets the `TransitGatewayId` member, replacing any previous value.
    pub fn set_transit_gateway_id(&mut self, transit_gateway_id: Option<String>) {
        self.transit_gateway_id = transit_gateway_id;
    }

    /// Sets the `TransitGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_transit_gateway_id(mut self, transit_gateway_id: impl Into<String>) -> Self {
        self.transit_gateway_id = Some(transit_gateway_id.into());
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

    /// Returns the `Options` member.
    #[must_use]
    pub fn options(&self) -> Option<&VpnConnectionOptionsSpecification> {
        self.options.as_ref()
    }

    /// Sets the `Options` member, replacing any previous value.
    pub fn set_options(&mut self, options: Option<VpnConnectionOptionsSpecification>) {
        self.options = options;
    }

    /// Sets the `Options` member and returns the updated value.
    #[must_use]
    pub fn with_options(mut self, options: impl Into<VpnConnectionOptionsSpecification>) -> Self {
        self.options = Some(options.into());
        self
    }
}

impl Shape for CreateVpnConnectionInput {
    const SHAPE_NAME: &'static str = "CreateVpnConnectionRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CustomerGatewayId", true, self.customer_gateway_id.as_ref()),
            Member::new("Type", true, self.r#type.as_ref()),
            Member::new("VpnGatewayId", false, self.vpn_gateway_id.as_ref()),
            Member::new("TransitGatewayId", false, self.transit_gateway_id.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("Options", false, self.options.as_ref()),
        ]
    }
}

impl fmt::Display for CreateVpnConnectionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for CreateVpnConnectionInput {
    type Output = CreateVpnConnectionOutput;

    const OPERATION: Ec2Operation = Ec2Operation::CreateVpnConnection;
}

/// EC2 DescribeInternetGatewaysInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeInternetGatewaysInput {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// One or more internet gateway IDs.
    #[serde(rename = "InternetGatewayIds", skip_serializing_if = "Option::is_none")]
    pub internet_gateway_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeInternetGatewaysInput {
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

    /// Returns the `InternetGatewayIds` member.
    #[must_use]
    pub fn internet_gateway_ids(&self) -> Option<&[String]> {
        self.internet_gateway_ids.as_deref()
    }

    /// Sets the `InternetGatewayIds` member, replacing any previous value.
    pub fn set_internet_gateway_ids(&mut self, internet_gateway_ids: Option<Vec<String>>) {
        self.internet_gateway_ids = internet_gateway_ids;
    }

    /// Appends to the `InternetGatewayIds` member and returns the updated value.
    #[must_use]
    pub fn with_internet_gateway_ids(
        mut self,
        internet_gateway_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.internet_gateway_ids
            .get_or_insert_with(Vec::new)
            .extend(internet_gateway_ids.into_iter().map(Into::into));
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

impl Shape for DescribeInternetGatewaysInput {
    const SHAPE_NAME: &'static str = "DescribeInternetGatewaysRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("InternetGatewayIds", false, self.internet_gateway_ids.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeInternetGatewaysInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeInternetGatewaysInput {
    type Output = DescribeInternetGatewaysOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeInternetGateways;
}

/// EC2 DescribeNetworkInterfacesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeNetworkInterfacesInput {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// One or more network interface IDs.
    #[serde(rename = "NetworkInterfaceIds", skip_serializing_if = "Option::is_none")]
    pub network_interface_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeNetworkInterfacesInput {
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

    /// Returns the `NetworkInterfaceIds` member.
    #[must_use]
    pub fn network_interface_ids(&self) -> Option<&[String]> {
        self.network_interface_ids.as_deref()
    }

    /// Sets the `NetworkInterfaceIds` member, replacing any previous value.
    pub fn set_network_interface_ids(&mut self, network_interface_ids: Option<Vec<String>>) {
        self.network_interface_ids = network_interface_ids;
    }

    /// Appends to the `NetworkInterfaceIds` member and returns the updated value.
    #[must_use]
    pub fn with_network_interface_ids(
        mut self,
        network_interface_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.network_interface_ids
            .get_or_insert_with(Vec::new)
            .extend(network_interface_ids.into_iter().map(Into::into));
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

impl Shape for DescribeNetworkInterfacesInput {
    const SHAPE_NAME: &'static str = "DescribeNetworkInterfacesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("NetworkInterfaceIds", false, self.network_interface_ids.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeNetworkInterfacesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeNetworkInterfacesInput {
    type Output = DescribeNetworkInterfacesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeNetworkInterfaces;
}

/// EC2 DescribeRouteTablesInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeRouteTablesInput {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// One or more route table IDs.
    #[serde(rename = "RouteTableIds", skip_serializing_if = "Option::is_none")]
    pub route_table_ids: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeRouteTablesInput {
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

    /// Returns the `RouteTableIds` member.
    #[must_use]
    pub fn route_table_ids(&self) -> Option<&[String]> {
        self.route_table_ids.as_deref()
    }

    /// Sets the `RouteTableIds` member, replacing any previous value.
    pub fn set_route_table_ids(&mut self, route_table_ids: Option<Vec<String>>) {
        self.route_table_ids = route_table_ids;
    }

    /// Appends to the `RouteTableIds` member and returns the updated value.
    #[must_use]
    pub fn with_route_table_ids(
        mut self,
        route_table_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.route_table_ids
            .get_or_insert_with(Vec::new)
            .extend(route_table_ids.into_iter().map(Into::into));
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

impl Shape for DescribeRouteTablesInput {
    const SHAPE_NAME: &'static str = "DescribeRouteTablesRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("RouteTableIds", false, self.route_table_ids.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeRouteTablesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeRouteTablesInput {
    type Output = DescribeRouteTablesOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeRouteTables;
}

/// EC2 DescribeSecurityGroupsInput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeSecurityGroupsInput {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// The IDs of the security groups.
    #[serde(rename = "GroupIds", skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(rename = "GroupNames", skip_serializing_if = "Option::is_none")]
    pub group_names: Option<Vec<String>>,
    #[serde(rename = "DryRun", skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribeSecurityGroupsInput {
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

    /// Returns the `GroupIds` member.
    #[must_use]
    pub fn group_ids(&self) -> Option<&[String]> {
        self.group_ids.as_deref()
    }

    /// Sets the `GroupIds` member, replacing any previous value.
    pub fn set_group_ids(&mut self, group_ids: Option<Vec<String>>) {
        self.group_ids = group_ids;
    }

    /// Appends to the `GroupIds` member and returns the updated value.
    #[must_use]
    pub fn with_group_ids(
        mut self,
        group_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.group_ids
            .get_or_insert_with(Vec::new)
            .extend(group_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `GroupNames` member.
    #[must_use]
    pub fn group_names(&self) -> Option<&[String]> {
        self.group_names.as_deref()
    }

    /// Sets the `GroupNames` member, replacing any previous value.
    pub fn set_group_names(&mut self, group_names: Option<Vec<String>>) {
        self.group_names = group_names;
    }

    /// Appends to the `GroupNames` member and returns the updated value.
    #[must_use]
    pub fn with_group_names(
        mut self,
        group_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.group_names
            .get_or_insert_with(Vec::new)
            .extend(group_names.into_iter().map(Into::into));
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

impl Shape for DescribeSecurityGroupsInput {
    const SHAPE_NAME: &'static str = "DescribeSecurityGroupsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Filters", false, self.filters.as_ref()),
            Member::new("GroupIds", false, self.group_ids.as_ref()),
            Member::new("GroupNames", false, self.group_names.as_ref()),
            Member::new("DryRun", false, self.dry_run.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
            Member::new("MaxResults", false, self.max_results.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeSecurityGroupsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl Ec2Request for DescribeSecurityGroupsInput {
    type Output = DescribeSecurityGroupsOutput;

    const OPERATION: Ec2Operation = Ec2Operation::DescribeSecurityGroups;
}

