//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;
use std::str::FromStr;

use crate::error::Ec2ModelError;

/// All supported EC2 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ec2Operation {
    /// The CreateRoute operation.
    CreateRoute,
    /// The DescribeRouteTables operation.
    DescribeRouteTables,
    /// The DescribeInternetGateways operation.
    DescribeInternetGateways,
    /// The DescribeSecurityGroups operation.
    DescribeSecurityGroups,
    /// The CreateFlowLogs operation.
    CreateFlowLogs,
    /// The DescribeNetworkInterfaces operation.
    DescribeNetworkInterfaces,
    /// The CreateVpnConnection operation.
    CreateVpnConnection,
    /// The DescribeInstances operation.
    DescribeInstances,
    /// The CreateCapacityReservation operation.
    CreateCapacityReservation,
    /// The DescribeCapacityReservations operation.
    DescribeCapacityReservations,
    /// The DescribeReservedInstancesOfferings operation.
    DescribeReservedInstancesOfferings,
    /// The RunInstances operation.
    RunInstances,
    /// The DescribeSpotInstanceRequests operation.
    DescribeSpotInstanceRequests,
    /// The DescribeInstanceTypes operation.
    DescribeInstanceTypes,
    /// The DescribeReservedInstances operation.
    DescribeReservedInstances,
    /// The DescribeFleets operation.
    DescribeFleets,
    /// The DescribeSpotFleetRequests operation.
    DescribeSpotFleetRequests,
    /// The CreateLaunchTemplate operation.
    CreateLaunchTemplate,
    /// The GetLaunchTemplateData operation.
    GetLaunchTemplateData,
    /// The DescribeImages operation.
    DescribeImages,
    /// The ImportImage operation.
    ImportImage,
    /// The DescribeFpgaImages operation.
    DescribeFpgaImages,
    /// The CreateVolume operation.
    CreateVolume,
}

impl Ec2Operation {
    /// Every supported operation.
    pub const ALL: &'static [Self] = &[
        Self::CreateRoute,
        Self::DescribeRouteTables,
        Self::DescribeInternetGateways,
        Self::DescribeSecurityGroups,
        Self::CreateFlowLogs,
        Self::DescribeNetworkInterfaces,
        Self::CreateVpnConnection,
        Self::DescribeInstances,
        Self::CreateCapacityReservation,
        Self::DescribeCapacityReservations,
        Self::DescribeReservedInstancesOfferings,
        Self::RunInstances,
        Self::DescribeSpotInstanceRequests,
        Self::DescribeInstanceTypes,
        Self::DescribeReservedInstances,
        Self::DescribeFleets,
        Self::DescribeSpotFleetRequests,
        Self::CreateLaunchTemplate,
        Self::GetLaunchTemplateData,
        Self::DescribeImages,
        Self::ImportImage,
        Self::DescribeFpgaImages,
        Self::CreateVolume,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateRoute => "CreateRoute",
            Self::DescribeRouteTables => "DescribeRouteTables",
            Self::DescribeInternetGateways => "DescribeInternetGateways",
            Self::DescribeSecurityGroups => "DescribeSecurityGroups",
            Self::CreateFlowLogs => "CreateFlowLogs",
            Self::DescribeNetworkInterfaces => "DescribeNetworkInterfaces",
            Self::CreateVpnConnection => "CreateVpnConnection",
            Self::DescribeInstances => "DescribeInstances",
            Self::CreateCapacityReservation => "CreateCapacityReservation",
            Self::DescribeCapacityReservations => "DescribeCapacityReservations",
            Self::DescribeReservedInstancesOfferings => "DescribeReservedInstancesOfferings",
            Self::RunInstances => "RunInstances",
            Self::DescribeSpotInstanceRequests => "DescribeSpotInstanceRequests",
            Self::DescribeInstanceTypes => "DescribeInstanceTypes",
            Self::DescribeReservedInstances => "DescribeReservedInstances",
            Self::DescribeFleets => "DescribeFleets",
            Self::DescribeSpotFleetRequests => "DescribeSpotFleetRequests",
            Self::CreateLaunchTemplate => "CreateLaunchTemplate",
            Self::GetLaunchTemplateData => "GetLaunchTemplateData",
            Self::DescribeImages => "DescribeImages",
            Self::ImportImage => "ImportImage",
            Self::DescribeFpgaImages => "DescribeFpgaImages",
            Self::CreateVolume => "CreateVolume",
        }
    }

    /// Parse an operation name string into an Ec2Operation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateRoute" => Some(Self::CreateRoute),
            "DescribeRouteTables" => Some(Self::DescribeRouteTables),
            "DescribeInternetGateways" => Some(Self::DescribeInternetGateways),
            "DescribeSecurityGroups" => Some(Self::DescribeSecurityGroups),
            "CreateFlowLogs" => Some(Self::CreateFlowLogs),
            "DescribeNetworkInterfaces" => Some(Self::DescribeNetworkInterfaces),
            "CreateVpnConnection" => Some(Self::CreateVpnConnection),
            "DescribeInstances" => Some(Self::DescribeInstances),
            "CreateCapacityReservation" => Some(Self::CreateCapacityReservation),
            "DescribeCapacityReservations" => Some(Self::DescribeCapacityReservations),
            "DescribeReservedInstancesOfferings" => Some(Self::DescribeReservedInstancesOfferings),
            "RunInstances" => Some(Self::RunInstances),
            "DescribeSpotInstanceRequests" => Some(Self::DescribeSpotInstanceRequests),
            "DescribeInstanceTypes" => Some(Self::DescribeInstanceTypes),
            "DescribeReservedInstances" => Some(Self::DescribeReservedInstances),
            "DescribeFleets" => Some(Self::DescribeFleets),
            "DescribeSpotFleetRequests" => Some(Self::DescribeSpotFleetRequests),
            "CreateLaunchTemplate" => Some(Self::CreateLaunchTemplate),
            "GetLaunchTemplateData" => Some(Self::GetLaunchTemplateData),
            "DescribeImages" => Some(Self::DescribeImages),
            "ImportImage" => Some(Self::ImportImage),
            "DescribeFpgaImages" => Some(Self::DescribeFpgaImages),
            "CreateVolume" => Some(Self::CreateVolume),
            _ => None,
        }
    }

    /// Returns the model name of the operation's input shape.
    #[must_use]
    pub fn input_shape_name(&self) -> &'static str {
        match self {
            Self::CreateRoute => "CreateRouteRequest",
            Self::DescribeRouteTables => "DescribeRouteTablesRequest",
            Self::DescribeInternetGateways => "DescribeInternetGatewaysRequest",
            Self::DescribeSecurityGroups => "DescribeSecurityGroupsRequest",
            Self::CreateFlowLogs => "CreateFlowLogsRequest",
            Self::DescribeNetworkInterfaces => "DescribeNetworkInterfacesRequest",
            Self::CreateVpnConnection => "CreateVpnConnectionRequest",
            Self::DescribeInstances => "DescribeInstancesRequest",
            Self::CreateCapacityReservation => "CreateCapacityReservationRequest",
            Self::DescribeCapacityReservations => "DescribeCapacityReservationsRequest",
            Self::DescribeReservedInstancesOfferings => "DescribeReservedInstancesOfferingsRequest",
            Self::RunInstances => "RunInstancesRequest",
            Self::DescribeSpotInstanceRequests => "DescribeSpotInstanceRequestsRequest",
            Self::DescribeInstanceTypes => "DescribeInstanceTypesRequest",
            Self::DescribeReservedInstances => "DescribeReservedInstancesRequest",
            Self::DescribeFleets => "DescribeFleetsRequest",
            Self::DescribeSpotFleetRequests => "DescribeSpotFleetRequestsRequest",
            Self::CreateLaunchTemplate => "CreateLaunchTemplateRequest",
            Self::GetLaunchTemplateData => "GetLaunchTemplateDataRequest",
            Self::DescribeImages => "DescribeImagesRequest",
            Self::ImportImage => "ImportImageRequest",
            Self::DescribeFpgaImages => "DescribeFpgaImagesRequest",
            Self::CreateVolume => "CreateVolumeRequest",
        }
    }

    /// Returns the model name of the operation's output shape.
    #[must_use]
    pub fn output_shape_name(&self) -> &'static str {
        match self {
            Self::CreateRoute => "CreateRouteResult",
            Self::DescribeRouteTables => "DescribeRouteTablesResult",
            Self::DescribeInternetGateways => "DescribeInternetGatewaysResult",
            Self::DescribeSecurityGroups => "DescribeSecurityGroupsResult",
            Self::CreateFlowLogs => "CreateFlowLogsResult",
            Self::DescribeNetworkInterfaces => "DescribeNetworkInterfacesResult",
            Self::CreateVpnConnection => "CreateVpnConnectionResult",
            Self::DescribeInstances => "DescribeInstancesResult",
            Self::CreateCapacityReservation => "CreateCapacityReservationResult",
            Self::DescribeCapacityReservations => "DescribeCapacityReservationsResult",
            Self::DescribeReservedInstancesOfferings => "DescribeReservedInstancesOfferingsResult",
            Self::RunInstances => "RunInstancesResult",
            Self::DescribeSpotInstanceRequests => "DescribeSpotInstanceRequestsResult",
            Self::DescribeInstanceTypes => "DescribeInstanceTypesResult",
            Self::DescribeReservedInstances => "DescribeReservedInstancesResult",
            Self::DescribeFleets => "DescribeFleetsResult",
            Self::DescribeSpotFleetRequests => "DescribeSpotFleetRequestsResult",
            Self::CreateLaunchTemplate => "CreateLaunchTemplateResult",
            Self::GetLaunchTemplateData => "GetLaunchTemplateDataResult",
            Self::DescribeImages => "DescribeImagesResult",
            Self::ImportImage => "ImportImageResult",
            Self::DescribeFpgaImages => "DescribeFpgaImagesResult",
            Self::CreateVolume => "CreateVolumeResult",
        }
    }
}

impl FromStr for Ec2Operation {
    type Err = Ec2ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Ec2ModelError::UnknownOperation(s.to_owned()))
    }
}

impl fmt::Display for Ec2Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
