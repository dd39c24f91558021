//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::{Member, Shape, render};
use crate::types::{
    InternetGateway, NetworkInterface, RouteTable, SecurityGroup, UnsuccessfulItem, VpnConnection,
};

/// EC2 CreateFlowLogsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateFlowLogsOutput {
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// The IDs of the flow logs.
    #[serde(rename = "FlowLogIds", skip_serializing_if = "Option::is_none")]
    pub flow_log_ids: Option<Vec<String>>,
    /// Information about the flow logs that could not be created successfully.
    #[serde(rename = "Unsuccessful", skip_serializing_if = "Option::is_none")]
    pub unsuccessful: Option<Vec<UnsuccessfulItem>>,
}

impl CreateFlowLogsOutput {
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

    /// Returns the `FlowLogIds` member.
    #[must_use]
    pub fn flow_log_ids(&self) -> Option<&[String]> {
        self.flow_log_ids.as_deref()
    }

    /// Sets the `FlowLogIds` member, replacing any previous value.
    pub fn set_flow_log_ids(&mut self, flow_log_ids: Option<Vec<String>>) {
        self.flow_log_ids = flow_log_ids;
    }

    /// Appends to the `FlowLogIds` member and returns the updated value.
    #[must_use]
    pub fn with_flow_log_ids(
        mut self,
        flow_log_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.flow_log_ids
            .get_or_insert_with(Vec::new)
            .extend(flow_log_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `Unsuccessful` member.
    #[must_use]
    pub fn unsuccessful(&self) -> Option<&[UnsuccessfulItem]> {
        self.unsuccessful.as_deref()
    }

    /// Sets the `Unsuccessful` member, replacing any previous value.
    pub fn set_unsuccessful(&mut self, unsuccessful: Option<Vec<UnsuccessfulItem>>) {
        self.unsuccessful = unsuccessful;
    }

    /// Appends to the `Unsuccessful` member and returns the updated value.
    #[must_use]
    pub fn with_unsuccessful(
        mut self,
        unsuccessful: impl IntoIterator<Item = impl Into<UnsuccessfulItem>>,
    ) -> Self {
        self.unsuccessful
            .get_or_insert_with(Vec::new)
            .extend(unsuccessful.into_iter().map(Into::into));
        self
    }
}

impl Shape for CreateFlowLogsOutput {
    const SHAPE_NAME: &'static str = "CreateFlowLogsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new("FlowLogIds", false, self.flow_log_ids.as_ref()),
            Member::new("Unsuccessful", false, self.unsuccessful.as_ref()),
        ]
    }
}

impl fmt::Display for CreateFlowLogsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CreateRouteOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateRouteOutput {
    /// Returns `true` if the request succeeds.
    #[serde(rename = "Return", skip_serializing_if = "Option::is_none")]
    pub r#return: Option<bool>,
}

impl CreateRouteOutput {
    /// Returns the `Return` member.
    #[must_use]
    pub fn r#return(&self) -> Option<bool> {
        self.r#return
    }

    /// Sets the `Return` member, replacing any previous value.
    pub fn set_return(&mut self, r#return: Option<bool>) {
        self.r#return = r#return;
    }

    /// Sets the `Return` member and returns the updated value.
    #[must_use]
    pub fn with_return(mut self, r#return: impl Into<bool>) -> Self {
        self.r#return = Some(r#return.into());
        self
    }
}

impl Shape for CreateRouteOutput {
    const SHAPE_NAME: &'static str = "CreateRouteResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Return", false, self.r#return.as_ref()),
        ]
    }
}

impl fmt::Display for CreateRouteOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CreateVpnConnectionOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateVpnConnectionOutput {
    /// Information about the VPN connection.
    #[serde(rename = "VpnConnection", skip_serializing_if = "Option::is_none")]
    pub vpn_connection: Option<VpnConnection>,
}

impl CreateVpnConnectionOutput {
    /// Returns the `VpnConnection` member.
    #[must_use]
    pub fn vpn_connection(&self) -> Option<&VpnConnection> {
        self.vpn_connection.as_ref()
    }

    /// Sets the `VpnConnection` member, replacing any previous value.
    pub fn set_vpn_connection(&mut self, vpn_connection: Option<VpnConnection>) {
        self.vpn_connection = vpn_connection;
    }

    /// Sets the `VpnConnection` member and returns the updated value.
    #[must_use]
    pub fn with_vpn_connection(mut self, vpn_connection: impl Into<VpnConnection>) -> Self {
        self.vpn_connection = Some(vpn_connection.into());
        self
    }
}

impl Shape for CreateVpnConnectionOutput {
    const SHAPE_NAME: &'static str = "CreateVpnConnectionResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("VpnConnection", false, self.vpn_connection.as_ref()),
        ]
    }
}

impl fmt::Display for CreateVpnConnectionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeInternetGatewaysOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeInternetGatewaysOutput {
    #[serde(rename = "InternetGateways", skip_serializing_if = "Option::is_none")]
    pub internet_gateways: Option<Vec<InternetGateway>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeInternetGatewaysOutput {
    /// Returns the `InternetGateways` member.
    #[must_use]
    pub fn internet_gateways(&self) -> Option<&[InternetGateway]> {
        self.internet_gateways.as_deref()
    }

    /// Sets the `InternetGateways` member, replacing any previous value.
    pub fn set_internet_gateways(&mut self, internet_gateways: Option<Vec<InternetGateway>>) {
        self.internet_gateways = internet_gateways;
    }

    /// Appends to the `InternetGateways` member and returns the updated value.
    #[must_use]
    pub fn with_internet_gateways(
        mut self,
        internet_gateways: impl IntoIterator<Item = impl Into<InternetGateway>>,
    ) -> Self {
        self.internet_gateways
            .get_or_insert_with(Vec::new)
            .extend(internet_gateways.into_iter().map(Into::into));
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

impl Shape for DescribeInternetGatewaysOutput {
    const SHAPE_NAME: &'static str = "DescribeInternetGatewaysResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("InternetGateways", false, self.internet_gateways.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeInternetGatewaysOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeNetworkInterfacesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeNetworkInterfacesOutput {
    /// Information about one or more network interfaces.
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<NetworkInterface>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeNetworkInterfacesOutput {
    /// Returns the `NetworkInterfaces` member.
    #[must_use]
    pub fn network_interfaces(&self) -> Option<&[NetworkInterface]> {
        self.network_interfaces.as_deref()
    }

    /// Sets the `NetworkInterfaces` member, replacing any previous value.
    pub fn set_network_interfaces(&mut self, network_interfaces: Option<Vec<NetworkInterface>>) {
        self.network_interfaces = network_interfaces;
    }

    /// Appends to the `NetworkInterfaces` member and returns the updated value.
    #[must_use]
    pub fn with_network_interfaces(
        mut self,
        network_interfaces: impl IntoIterator<Item = impl Into<NetworkInterface>>,
    ) -> Self {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .extend(network_interfaces.into_iter().map(Into::into));
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

impl Shape for DescribeNetworkInterfacesOutput {
    const SHAPE_NAME: &'static str = "DescribeNetworkInterfacesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeNetworkInterfacesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeRouteTablesOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeRouteTablesOutput {
    /// Information about one or more route tables.
    #[serde(rename = "RouteTables", skip_serializing_if = "Option::is_none")]
    pub route_tables: Option<Vec<RouteTable>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeRouteTablesOutput {
    /// Returns the `RouteTables` member.
    #[must_use]
    pub fn route_tables(&self) -> Option<&[RouteTable]> {
        self.route_tables.as_deref()
    }

    /// Sets the `RouteTables` member, replacing any previous value.
    pub fn set_route_tables(&mut self, route_tables: Option<Vec<RouteTable>>) {
        self.route_tables = route_tables;
    }

    /// Appends to the `RouteTables` member and returns the updated value.
    #[must_use]
    pub fn with_route_tables(
        mut self,
        route_tables: impl IntoIterator<Item = impl Into<RouteTable>>,
    ) -> Self {
        self.route_tables
            .get_or_insert_with(Vec::new)
            .extend(route_tables.into_iter().map(Into::into));
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

impl Shape for DescribeRouteTablesOutput {
    const SHAPE_NAME: &'static str = "DescribeRouteTablesResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("RouteTables", false, self.route_tables.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeRouteTablesOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeSecurityGroupsOutput.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeSecurityGroupsOutput {
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<SecurityGroup>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeSecurityGroupsOutput {
    /// Returns the `SecurityGroups` member.
    #[must_use]
    pub fn security_groups(&self) -> Option<&[SecurityGroup]> {
        self.security_groups.as_deref()
    }

    /// Sets the `SecurityGroups` member, replacing any previous value.
    pub fn set_security_groups(&mut self, security_groups: Option<Vec<SecurityGroup>>) {
        self.security_groups = security_groups;
    }

    /// Appends to the `SecurityGroups` member and returns the updated value.
    #[must_use]
    pub fn with_security_groups(
        mut self,
        security_groups: impl IntoIterator<Item = impl Into<SecurityGroup>>,
    ) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
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

impl Shape for DescribeSecurityGroupsOutput {
    const SHAPE_NAME: &'static str = "DescribeSecurityGroupsResult";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("NextToken", false, self.next_token.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeSecurityGroupsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

