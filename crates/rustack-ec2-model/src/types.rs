//! Auto-generated from the EC2 Smithy model. DO NOT EDIT.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ec2_enum;
use crate::shape::{Member, Shape, render};

ec2_enum! {
    /// EC2 ActivityStatus.
    ActivityStatus {
        Error => "error",
        PendingFulfillment => "pending_fulfillment",
        PendingTermination => "pending_termination",
        Fulfilled => "fulfilled",
    }
}

ec2_enum! {
    /// EC2 AllocationStrategy.
    AllocationStrategy {
        LowestPrice => "lowestPrice",
        Diversified => "diversified",
        CapacityOptimized => "capacityOptimized",
    }
}

ec2_enum! {
    /// EC2 ArchitectureType.
    ArchitectureType {
        I386 => "i386",
        X8664 => "x86_64",
        Arm64 => "arm64",
    }
}

ec2_enum! {
    /// EC2 ArchitectureValues.
    ArchitectureValues {
        I386 => "i386",
        X8664 => "x86_64",
        Arm64 => "arm64",
    }
}

ec2_enum! {
    /// EC2 AttachmentStatus.
    AttachmentStatus {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
    }
}

ec2_enum! {
    /// EC2 BatchState.
    BatchState {
        Submitted => "submitted",
        Active => "active",
        Cancelled => "cancelled",
        Failed => "failed",
        CancelledRunning => "cancelled_running",
        CancelledTerminating => "cancelled_terminating",
        Modifying => "modifying",
    }
}

ec2_enum! {
    /// EC2 CapacityReservationInstancePlatform.
    CapacityReservationInstancePlatform {
        LinuxUnix => "Linux/UNIX",
        RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
        SuseLinux => "SUSE Linux",
        Windows => "Windows",
        WindowsWithSqlServer => "Windows with SQL Server",
        WindowsWithSqlServerEnterprise => "Windows with SQL Server Enterprise",
        WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
        WindowsWithSqlServerWeb => "Windows with SQL Server Web",
        LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
        LinuxWithSqlServerWeb => "Linux with SQL Server Web",
        LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
    }
}

ec2_enum! {
    /// EC2 CapacityReservationPreference.
    CapacityReservationPreference {
        Open => "open",
        None => "none",
    }
}

ec2_enum! {
    /// EC2 CapacityReservationState.
    CapacityReservationState {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
        Pending => "pending",
        Failed => "failed",
    }
}

ec2_enum! {
    /// EC2 CapacityReservationTenancy.
    CapacityReservationTenancy {
        Default => "default",
        Dedicated => "dedicated",
    }
}

ec2_enum! {
    /// EC2 CurrencyCodeValues.
    CurrencyCodeValues {
        Usd => "USD",
    }
}

ec2_enum! {
    /// EC2 DefaultTargetCapacityType.
    DefaultTargetCapacityType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    /// EC2 DeviceType.
    DeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

ec2_enum! {
    /// EC2 DiskType.
    DiskType {
        Hdd => "hdd",
        Ssd => "ssd",
    }
}

ec2_enum! {
    /// EC2 EbsEncryptionSupport.
    EbsEncryptionSupport {
        Unsupported => "unsupported",
        Supported => "supported",
    }
}

ec2_enum! {
    /// EC2 EbsNvmeSupport.
    EbsNvmeSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Required => "required",
    }
}

ec2_enum! {
    /// EC2 EbsOptimizedSupport.
    EbsOptimizedSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Default => "default",
    }
}

ec2_enum! {
    /// EC2 EnaSupport.
    EnaSupport {
        Unsupported => "unsupported",
        Supported => "supported",
        Required => "required",
    }
}

ec2_enum! {
    /// EC2 EndDateType.
    EndDateType {
        Unlimited => "unlimited",
        Limited => "limited",
    }
}

ec2_enum! {
    /// EC2 ExcessCapacityTerminationPolicy.
    ExcessCapacityTerminationPolicy {
        NoTermination => "noTermination",
        Default => "default",
    }
}

ec2_enum! {
    /// EC2 FleetActivityStatus.
    FleetActivityStatus {
        Error => "error",
        PendingFulfillment => "pending_fulfillment",
        PendingTermination => "pending_termination",
        Fulfilled => "fulfilled",
    }
}

ec2_enum! {
    /// EC2 FleetCapacityReservationUsageStrategy.
    FleetCapacityReservationUsageStrategy {
        UseCapacityReservationsFirst => "use-capacity-reservations-first",
    }
}

ec2_enum! {
    /// EC2 FleetExcessCapacityTerminationPolicy.
    FleetExcessCapacityTerminationPolicy {
        NoTermination => "no-termination",
        Termination => "termination",
    }
}

ec2_enum! {
    /// EC2 FleetOnDemandAllocationStrategy.
    FleetOnDemandAllocationStrategy {
        LowestPrice => "lowest-price",
        Prioritized => "prioritized",
    }
}

ec2_enum! {
    /// EC2 FleetStateCode.
    FleetStateCode {
        Submitted => "submitted",
        Active => "active",
        Deleted => "deleted",
        Failed => "failed",
        DeletedRunning => "deleted_running",
        DeletedTerminating => "deleted_terminating",
        Modifying => "modifying",
    }
}

ec2_enum! {
    /// EC2 FleetType.
    FleetType {
        Request => "request",
        Maintain => "maintain",
        Instant => "instant",
    }
}

ec2_enum! {
    /// EC2 FlowLogsResourceType.
    FlowLogsResourceType {
        Vpc => "VPC",
        Subnet => "Subnet",
        NetworkInterface => "NetworkInterface",
    }
}

ec2_enum! {
    /// EC2 FpgaImageStateCode.
    FpgaImageStateCode {
        Pending => "pending",
        Failed => "failed",
        Available => "available",
        Unavailable => "unavailable",
    }
}

ec2_enum! {
    /// EC2 GatewayType.
    GatewayType {
        Ipsec1 => "ipsec.1",
    }
}

ec2_enum! {
    /// EC2 HttpTokensState.
    HttpTokensState {
        Optional => "optional",
        Required => "required",
    }
}

ec2_enum! {
    /// EC2 HypervisorType.
    HypervisorType {
        Ovm => "ovm",
        Xen => "xen",
    }
}

ec2_enum! {
    /// EC2 ImageState.
    ImageState {
        Pending => "pending",
        Available => "available",
        Invalid => "invalid",
        Deregistered => "deregistered",
        Transient => "transient",
        Failed => "failed",
        Error => "error",
    }
}

ec2_enum! {
    /// EC2 ImageTypeValues.
    ImageTypeValues {
        Machine => "machine",
        Kernel => "kernel",
        Ramdisk => "ramdisk",
    }
}

ec2_enum! {
    /// EC2 InstanceInterruptionBehavior.
    InstanceInterruptionBehavior {
        Hibernate => "hibernate",
        Stop => "stop",
        Terminate => "terminate",
    }
}

ec2_enum! {
    /// EC2 InstanceLifecycle.
    InstanceLifecycle {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    /// EC2 InstanceLifecycleType.
    InstanceLifecycleType {
        Spot => "spot",
        Scheduled => "scheduled",
    }
}

ec2_enum! {
    /// EC2 InstanceMatchCriteria.
    InstanceMatchCriteria {
        Open => "open",
        Targeted => "targeted",
    }
}

ec2_enum! {
    /// EC2 InstanceMetadataEndpointState.
    InstanceMetadataEndpointState {
        Disabled => "disabled",
        Enabled => "enabled",
    }
}

ec2_enum! {
    /// EC2 InstanceMetadataOptionsState.
    InstanceMetadataOptionsState {
        Pending => "pending",
        Applied => "applied",
    }
}

ec2_enum! {
    /// EC2 InstanceStateName.
    InstanceStateName {
        Pending => "pending",
        Running => "running",
        ShuttingDown => "shutting-down",
        Terminated => "terminated",
        Stopping => "stopping",
        Stopped => "stopped",
    }
}

ec2_enum! {
    /// EC2 InstanceType.
    InstanceType {
        T1Micro => "t1.micro",
        T2Nano => "t2.nano",
        T2Micro => "t2.micro",
        T2Small => "t2.small",
        T2Medium => "t2.medium",
        T2Large => "t2.large",
        T2Xlarge => "t2.xlarge",
        T22xlarge => "t2.2xlarge",
        T3Nano => "t3.nano",
        T3Micro => "t3.micro",
        T3Small => "t3.small",
        T3Medium => "t3.medium",
        T3Large => "t3.large",
        T3Xlarge => "t3.xlarge",
        T32xlarge => "t3.2xlarge",
        T3aNano => "t3a.nano",
        T3aMicro => "t3a.micro",
        T3aSmall => "t3a.small",
        T3aMedium => "t3a.medium",
        T3aLarge => "t3a.large",
        T3aXlarge => "t3a.xlarge",
        T3a2xlarge => "t3a.2xlarge",
        M1Small => "m1.small",
        M1Medium => "m1.medium",
        M1Large => "m1.large",
        M1Xlarge => "m1.xlarge",
        M3Medium => "m3.medium",
        M3Large => "m3.large",
        M3Xlarge => "m3.xlarge",
        M32xlarge => "m3.2xlarge",
        M4Large => "m4.large",
        M4Xlarge => "m4.xlarge",
        M42xlarge => "m4.2xlarge",
        M44xlarge => "m4.4xlarge",
        M410xlarge => "m4.10xlarge",
        M416xlarge => "m4.16xlarge",
        M2Xlarge => "m2.xlarge",
        M22xlarge => "m2.2xlarge",
        M24xlarge => "m2.4xlarge",
        Cr18xlarge => "cr1.8xlarge",
        R3Large => "r3.large",
        R3Xlarge => "r3.xlarge",
        R32xlarge => "r3.2xlarge",
        R34xlarge => "r3.4xlarge",
        R38xlarge => "r3.8xlarge",
        R4Large => "r4.large",
        R4Xlarge => "r4.xlarge",
        R42xlarge => "r4.2xlarge",
        R44xlarge => "r4.4xlarge",
        R48xlarge => "r4.8xlarge",
        R416xlarge => "r4.16xlarge",
        R5Large => "r5.large",
        R5Xlarge => "r5.xlarge",
        R52xlarge => "r5.2xlarge",
        R54xlarge => "r5.4xlarge",
        R58xlarge => "r5.8xlarge",
        R512xlarge => "r5.12xlarge",
        R516xlarge => "r5.16xlarge",
        R524xlarge => "r5.24xlarge",
        R5Metal => "r5.metal",
        R5aLarge => "r5a.large",
        R5aXlarge => "r5a.xlarge",
        R5a2xlarge => "r5a.2xlarge",
        R5a4xlarge => "r5a.4xlarge",
        R5a8xlarge => "r5a.8xlarge",
        R5a12xlarge => "r5a.12xlarge",
        R5a16xlarge => "r5a.16xlarge",
        R5a24xlarge => "r5a.24xlarge",
        R5dLarge => "r5d.large",
        R5dXlarge => "r5d.xlarge",
        R5d2xlarge => "r5d.2xlarge",
        R5d4xlarge => "r5d.4xlarge",
        R5d8xlarge => "r5d.8xlarge",
        R5d12xlarge => "r5d.12xlarge",
        R5d16xlarge => "r5d.16xlarge",
        R5d24xlarge => "r5d.24xlarge",
        R5dMetal => "r5d.metal",
        R5adLarge => "r5ad.large",
        R5adXlarge => "r5ad.xlarge",
        R5ad2xlarge => "r5ad.2xlarge",
        R5ad4xlarge => "r5ad.4xlarge",
        R5ad8xlarge => "r5ad.8xlarge",
        R5ad12xlarge => "r5ad.12xlarge",
        R5ad16xlarge => "r5ad.16xlarge",
        R5ad24xlarge => "r5ad.24xlarge",
        R6gMetal => "r6g.metal",
        R6gMedium => "r6g.medium",
        R6gLarge => "r6g.large",
        R6gXlarge => "r6g.xlarge",
        R6g2xlarge => "r6g.2xlarge",
        R6g4xlarge => "r6g.4xlarge",
        R6g8xlarge => "r6g.8xlarge",
        R6g12xlarge => "r6g.12xlarge",
        R6g16xlarge => "r6g.16xlarge",
        X116xlarge => "x1.16xlarge",
        X132xlarge => "x1.32xlarge",
        X1eXlarge => "x1e.xlarge",
        X1e2xlarge => "x1e.2xlarge",
        X1e4xlarge => "x1e.4xlarge",
        X1e8xlarge => "x1e.8xlarge",
        X1e16xlarge => "x1e.16xlarge",
        X1e32xlarge => "x1e.32xlarge",
        I2Xlarge => "i2.xlarge",
        I22xlarge => "i2.2xlarge",
        I24xlarge => "i2.4xlarge",
        I28xlarge => "i2.8xlarge",
        I3Large => "i3.large",
        I3Xlarge => "i3.xlarge",
        I32xlarge => "i3.2xlarge",
        I34xlarge => "i3.4xlarge",
        I38xlarge => "i3.8xlarge",
        I316xlarge => "i3.16xlarge",
        I3Metal => "i3.metal",
        I3enLarge => "i3en.large",
        I3enXlarge => "i3en.xlarge",
        I3en2xlarge => "i3en.2xlarge",
        I3en3xlarge => "i3en.3xlarge",
        I3en6xlarge => "i3en.6xlarge",
        I3en12xlarge => "i3en.12xlarge",
        I3en24xlarge => "i3en.24xlarge",
        I3enMetal => "i3en.metal",
        Hi14xlarge => "hi1.4xlarge",
        Hs18xlarge => "hs1.8xlarge",
        C1Medium => "c1.medium",
        C1Xlarge => "c1.xlarge",
        C3Large => "c3.large",
        C3Xlarge => "c3.xlarge",
        C32xlarge => "c3.2xlarge",
        C34xlarge => "c3.4xlarge",
        C38xlarge => "c3.8xlarge",
        C4Large => "c4.large",
        C4Xlarge => "c4.xlarge",
        C42xlarge => "c4.2xlarge",
        C44xlarge => "c4.4xlarge",
        C48xlarge => "c4.8xlarge",
        C5Large => "c5.large",
        C5Xlarge => "c5.xlarge",
        C52xlarge => "c5.2xlarge",
        C54xlarge => "c5.4xlarge",
        C59xlarge => "c5.9xlarge",
        C512xlarge => "c5.12xlarge",
        C518xlarge => "c5.18xlarge",
        C524xlarge => "c5.24xlarge",
        C5Metal => "c5.metal",
        C5aLarge => "c5a.large",
        C5aXlarge => "c5a.xlarge",
        C5a2xlarge => "c5a.2xlarge",
        C5a4xlarge => "c5a.4xlarge",
        C5a8xlarge => "c5a.8xlarge",
        C5a12xlarge => "c5a.12xlarge",
        C5a16xlarge => "c5a.16xlarge",
        C5a24xlarge => "c5a.24xlarge",
        C5dLarge => "c5d.large",
        C5dXlarge => "c5d.xlarge",
        C5d2xlarge => "c5d.2xlarge",
        C5d4xlarge => "c5d.4xlarge",
        C5d9xlarge => "c5d.9xlarge",
        C5d12xlarge => "c5d.12xlarge",
        C5d18xlarge => "c5d.18xlarge",
        C5d24xlarge => "c5d.24xlarge",
        C5dMetal => "c5d.metal",
        C5nLarge => "c5n.large",
        C5nXlarge => "c5n.xlarge",
        C5n2xlarge => "c5n.2xlarge",
        C5n4xlarge => "c5n.4xlarge",
        C5n9xlarge => "c5n.9xlarge",
        C5n18xlarge => "c5n.18xlarge",
        C6gMetal => "c6g.metal",
        C6gMedium => "c6g.medium",
        C6gLarge => "c6g.large",
        C6gXlarge => "c6g.xlarge",
        C6g2xlarge => "c6g.2xlarge",
        C6g4xlarge => "c6g.4xlarge",
        C6g8xlarge => "c6g.8xlarge",
        C6g12xlarge => "c6g.12xlarge",
        C6g16xlarge => "c6g.16xlarge",
        Cc14xlarge => "cc1.4xlarge",
        Cc28xlarge => "cc2.8xlarge",
        G22xlarge => "g2.2xlarge",
        G28xlarge => "g2.8xlarge",
        G34xlarge => "g3.4xlarge",
        G38xlarge => "g3.8xlarge",
        G316xlarge => "g3.16xlarge",
        G3sXlarge => "g3s.xlarge",
        G4dnXlarge => "g4dn.xlarge",
        G4dn2xlarge => "g4dn.2xlarge",
        G4dn4xlarge => "g4dn.4xlarge",
        G4dn8xlarge => "g4dn.8xlarge",
        G4dn12xlarge => "g4dn.12xlarge",
        G4dn16xlarge => "g4dn.16xlarge",
        G4dnMetal => "g4dn.metal",
        Cg14xlarge => "cg1.4xlarge",
        P2Xlarge => "p2.xlarge",
        P28xlarge => "p2.8xlarge",
        P216xlarge => "p2.16xlarge",
        P32xlarge => "p3.2xlarge",
        P38xlarge => "p3.8xlarge",
        P316xlarge => "p3.16xlarge",
        P3dn24xlarge => "p3dn.24xlarge",
        D2Xlarge => "d2.xlarge",
        D22xlarge => "d2.2xlarge",
        D24xlarge => "d2.4xlarge",
        D28xlarge => "d2.8xlarge",
        F12xlarge => "f1.2xlarge",
        F14xlarge => "f1.4xlarge",
        F116xlarge => "f1.16xlarge",
        M5Large => "m5.large",
        M5Xlarge => "m5.xlarge",
        M52xlarge => "m5.2xlarge",
        M54xlarge => "m5.4xlarge",
        M58xlarge => "m5.8xlarge",
        M512xlarge => "m5.12xlarge",
        M516xlarge => "m5.16xlarge",
        M524xlarge => "m5.24xlarge",
        M5Metal => "m5.metal",
        M5aLarge => "m5a.large",
        M5aXlarge => "m5a.xlarge",
        M5a2xlarge => "m5a.2xlarge",
        M5a4xlarge => "m5a.4xlarge",
        M5a8xlarge => "m5a.8xlarge",
        M5a12xlarge => "m5a.12xlarge",
        M5a16xlarge => "m5a.16xlarge",
        M5a24xlarge => "m5a.24xlarge",
        M5dLarge => "m5d.large",
        M5dXlarge => "m5d.xlarge",
        M5d2xlarge => "m5d.2xlarge",
        M5d4xlarge => "m5d.4xlarge",
        M5d8xlarge => "m5d.8xlarge",
        M5d12xlarge => "m5d.12xlarge",
        M5d16xlarge => "m5d.16xlarge",
        M5d24xlarge => "m5d.24xlarge",
        M5dMetal => "m5d.metal",
        M5adLarge => "m5ad.large",
        M5adXlarge => "m5ad.xlarge",
        M5ad2xlarge => "m5ad.2xlarge",
        M5ad4xlarge => "m5ad.4xlarge",
        M5ad8xlarge => "m5ad.8xlarge",
        M5ad12xlarge => "m5ad.12xlarge",
        M5ad16xlarge => "m5ad.16xlarge",
        M5ad24xlarge => "m5ad.24xlarge",
        H12xlarge => "h1.2xlarge",
        H14xlarge => "h1.4xlarge",
        H18xlarge => "h1.8xlarge",
        H116xlarge => "h1.16xlarge",
        Z1dLarge => "z1d.large",
        Z1dXlarge => "z1d.xlarge",
        Z1d2xlarge => "z1d.2xlarge",
        Z1d3xlarge => "z1d.3xlarge",
        Z1d6xlarge => "z1d.6xlarge",
        Z1d12xlarge => "z1d.12xlarge",
        Z1dMetal => "z1d.metal",
        U6tb1Metal => "u-6tb1.metal",
        U9tb1Metal => "u-9tb1.metal",
        U12tb1Metal => "u-12tb1.metal",
        U18tb1Metal => "u-18tb1.metal",
        U24tb1Metal => "u-24tb1.metal",
        A1Medium => "a1.medium",
        A1Large => "a1.large",
        A1Xlarge => "a1.xlarge",
        A12xlarge => "a1.2xlarge",
        A14xlarge => "a1.4xlarge",
        A1Metal => "a1.metal",
        M5dnLarge => "m5dn.large",
        M5dnXlarge => "m5dn.xlarge",
        M5dn2xlarge => "m5dn.2xlarge",
        M5dn4xlarge => "m5dn.4xlarge",
        M5dn8xlarge => "m5dn.8xlarge",
        M5dn12xlarge => "m5dn.12xlarge",
        M5dn16xlarge => "m5dn.16xlarge",
        M5dn24xlarge => "m5dn.24xlarge",
        M5nLarge => "m5n.large",
        M5nXlarge => "m5n.xlarge",
        M5n2xlarge => "m5n.2xlarge",
        M5n4xlarge => "m5n.4xlarge",
        M5n8xlarge => "m5n.8xlarge",
        M5n12xlarge => "m5n.12xlarge",
        M5n16xlarge => "m5n.16xlarge",
        M5n24xlarge => "m5n.24xlarge",
        R5dnLarge => "r5dn.large",
        R5dnXlarge => "r5dn.xlarge",
        R5dn2xlarge => "r5dn.2xlarge",
        R5dn4xlarge => "r5dn.4xlarge",
        R5dn8xlarge => "r5dn.8xlarge",
        R5dn12xlarge => "r5dn.12xlarge",
        R5dn16xlarge => "r5dn.16xlarge",
        R5dn24xlarge => "r5dn.24xlarge",
        R5nLarge => "r5n.large",
        R5nXlarge => "r5n.xlarge",
        R5n2xlarge => "r5n.2xlarge",
        R5n4xlarge => "r5n.4xlarge",
        R5n8xlarge => "r5n.8xlarge",
        R5n12xlarge => "r5n.12xlarge",
        R5n16xlarge => "r5n.16xlarge",
        R5n24xlarge => "r5n.24xlarge",
        Inf1Xlarge => "inf1.xlarge",
        Inf12xlarge => "inf1.2xlarge",
        Inf16xlarge => "inf1.6xlarge",
        Inf124xlarge => "inf1.24xlarge",
        M6gMetal => "m6g.metal",
        M6gMedium => "m6g.medium",
        M6gLarge => "m6g.large",
        M6gXlarge => "m6g.xlarge",
        M6g2xlarge => "m6g.2xlarge",
        M6g4xlarge => "m6g.4xlarge",
        M6g8xlarge => "m6g.8xlarge",
        M6g12xlarge => "m6g.12xlarge",
        M6g16xlargePrivateStringInstanceType => "m6g.16xlarge /
    private String instanceType;

    /",
    }
}

ec2_enum! {
    /// EC2 InstanceTypeHypervisor.
    InstanceTypeHypervisor {
        Nitro => "nitro",
        Xen => "xen",
    }
}

ec2_enum! {
    /// EC2 LaunchTemplateHttpTokensState.
    LaunchTemplateHttpTokensState {
        Optional => "optional",
        Required => "required",
    }
}

ec2_enum! {
    /// EC2 LaunchTemplateInstanceMetadataEndpointState.
    LaunchTemplateInstanceMetadataEndpointState {
        Disabled => "disabled",
        Enabled => "enabled",
    }
}

ec2_enum! {
    /// EC2 LaunchTemplateInstanceMetadataOptionsState.
    LaunchTemplateInstanceMetadataOptionsState {
        Pending => "pending",
        Applied => "applied",
    }
}

ec2_enum! {
    /// EC2 LogDestinationType.
    LogDestinationType {
        CloudWatchLogs => "cloud-watch-logs",
        S3 => "s3",
    }
}

ec2_enum! {
    /// EC2 MarketType.
    MarketType {
        Spot => "spot",
    }
}

ec2_enum! {
    /// EC2 MonitoringState.
    MonitoringState {
        Disabled => "disabled",
        Disabling => "disabling",
        Enabled => "enabled",
        Pending => "pending",
    }
}

ec2_enum! {
    /// EC2 NetworkInterfaceStatus.
    NetworkInterfaceStatus {
        Available => "available",
        Associated => "associated",
        Attaching => "attaching",
        InUse => "in-use",
        Detaching => "detaching",
    }
}

ec2_enum! {
    /// EC2 NetworkInterfaceType.
    NetworkInterfaceType {
        Interface => "interface",
        NatGateway => "natGateway",
        Efa => "efa",
    }
}

ec2_enum! {
    /// EC2 OfferingClassType.
    OfferingClassType {
        Standard => "standard",
        Convertible => "convertible",
    }
}

ec2_enum! {
    /// EC2 OfferingTypeValues.
    OfferingTypeValues {
        HeavyUtilization => "Heavy Utilization",
        MediumUtilization => "Medium Utilization",
        LightUtilization => "Light Utilization",
        NoUpfront => "No Upfront",
        PartialUpfront => "Partial Upfront",
        AllUpfront => "All Upfront",
    }
}

ec2_enum! {
    /// EC2 OnDemandAllocationStrategy.
    OnDemandAllocationStrategy {
        LowestPrice => "lowestPrice",
        Prioritized => "prioritized",
    }
}

ec2_enum! {
    /// EC2 PlacementGroupStrategy.
    PlacementGroupStrategy {
        Cluster => "cluster",
        Partition => "partition",
        Spread => "spread",
    }
}

ec2_enum! {
    /// EC2 PlatformValues.
    PlatformValues {
        Windows => "Windows",
    }
}

ec2_enum! {
    /// EC2 ProductCodeValues.
    ProductCodeValues {
        Devpay => "devpay",
        Marketplace => "marketplace",
    }
}

ec2_enum! {
    /// EC2 RIProductDescription.
    RIProductDescription {
        LinuxUnix => "Linux/UNIX",
        LinuxUnixAmazonVpc => "Linux/UNIX (Amazon VPC)",
        Windows => "Windows",
        WindowsAmazonVpc => "Windows (Amazon VPC)",
    }
}

ec2_enum! {
    /// EC2 RecurringChargeFrequency.
    RecurringChargeFrequency {
        Hourly => "Hourly",
    }
}

ec2_enum! {
    /// EC2 ReservedInstanceState.
    ReservedInstanceState {
        PaymentPending => "payment-pending",
        Active => "active",
        PaymentFailed => "payment-failed",
        Retired => "retired",
        Queued => "queued",
        QueuedDeleted => "queued-deleted",
    }
}

ec2_enum! {
    /// EC2 ResourceType.
    ResourceType {
        CapacityReservation => "capacity-reservation",
        ClientVpnEndpoint => "client-vpn-endpoint",
        CustomerGateway => "customer-gateway",
        DedicatedHost => "dedicated-host",
        DhcpOptions => "dhcp-options",
        ElasticIp => "elastic-ip",
        Fleet => "fleet",
        FpgaImage => "fpga-image",
        HostReservation => "host-reservation",
        Image => "image",
        ImportImageTask => "import-image-task",
        Instance => "instance",
        InternetGateway => "internet-gateway",
        KeyPair => "key-pair",
        LaunchTemplate => "launch-template",
        Natgateway => "natgateway",
        NetworkAcl => "network-acl",
        NetworkInterface => "network-interface",
        PlacementGroup => "placement-group",
        ReservedInstances => "reserved-instances",
        RouteTable => "route-table",
        SecurityGroup => "security-group",
        Snapshot => "snapshot",
        SpotInstancesRequest => "spot-instances-request",
        Subnet => "subnet",
        TransitGateway => "transit-gateway",
        Volume => "volume",
        Vpc => "vpc",
        VpcFlowLog => "vpc-flow-log",
        VpcPeeringConnection => "vpc-peering-connection",
    }
}

ec2_enum! {
    /// EC2 RootDeviceType.
    RootDeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

ec2_enum! {
    /// EC2 RouteOrigin.
    RouteOrigin {
        CreateRouteTable => "CreateRouteTable",
        CreateRoute => "CreateRoute",
        EnableVgwRoutePropagation => "EnableVgwRoutePropagation",
    }
}

ec2_enum! {
    /// EC2 RouteState.
    RouteState {
        Active => "active",
        Blackhole => "blackhole",
    }
}

ec2_enum! {
    /// EC2 RouteTableAssociationStateCode.
    RouteTableAssociationStateCode {
        Associating => "associating",
        Associated => "associated",
        Disassociating => "disassociating",
        Disassociated => "disassociated",
        Failed => "failed",
    }
}

ec2_enum! {
    /// EC2 Scope.
    Scope {
        AvailabilityZone => "Availability Zone",
        Region => "Region",
    }
}

ec2_enum! {
    /// EC2 ShutdownBehavior.
    ShutdownBehavior {
        Stop => "stop",
        Terminate => "terminate",
    }
}

ec2_enum! {
    /// EC2 SpotAllocationStrategy.
    SpotAllocationStrategy {
        LowestPrice => "lowest-price",
        Diversified => "diversified",
        CapacityOptimized => "capacity-optimized",
    }
}

ec2_enum! {
    /// EC2 SpotInstanceInterruptionBehavior.
    SpotInstanceInterruptionBehavior {
        Hibernate => "hibernate",
        Stop => "stop",
        Terminate => "terminate",
    }
}

ec2_enum! {
    /// EC2 SpotInstanceState.
    SpotInstanceState {
        Open => "open",
        Active => "active",
        Closed => "closed",
        Cancelled => "cancelled",
        Failed => "failed",
    }
}

ec2_enum! {
    /// EC2 SpotInstanceType.
    SpotInstanceType {
        OneTime => "one-time",
        Persistent => "persistent",
    }
}

ec2_enum! {
    /// EC2 TelemetryStatus.
    TelemetryStatus {
        Up => "UP",
        Down => "DOWN",
    }
}

ec2_enum! {
    /// EC2 Tenancy.
    Tenancy {
        Default => "default",
        Dedicated => "dedicated",
        Host => "host",
    }
}

ec2_enum! {
    /// EC2 TrafficType.
    TrafficType {
        Accept => "ACCEPT",
        Reject => "REJECT",
        All => "ALL",
    }
}

ec2_enum! {
    /// EC2 UsageClassType.
    UsageClassType {
        Spot => "spot",
        OnDemand => "on-demand",
    }
}

ec2_enum! {
    /// EC2 VirtualizationType.
    VirtualizationType {
        Hvm => "hvm",
        Paravirtual => "paravirtual",
    }
}

ec2_enum! {
    /// EC2 VolumeAttachmentState.
    VolumeAttachmentState {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
        Busy => "busy",
    }
}

ec2_enum! {
    /// EC2 VolumeState.
    VolumeState {
        Creating => "creating",
        Available => "available",
        InUse => "in-use",
        Deleting => "deleting",
        Deleted => "deleted",
        Error => "error",
    }
}

ec2_enum! {
    /// EC2 VolumeType.
    VolumeType {
        Standard => "standard",
        Io1 => "io1",
        Io2 => "io2",
        Gp2 => "gp2",
        Sc1 => "sc1",
        St1 => "st1",
        Gp3 => "gp3",
    }
}

ec2_enum! {
    /// EC2 VpnState.
    VpnState {
        Pending => "pending",
        Available => "available",
        Deleting => "deleting",
        Deleted => "deleted",
    }
}

ec2_enum! {
    /// EC2 VpnStaticRouteSource.
    VpnStaticRouteSource {
        Static => "Static",
    }
}

/// EC2 BlockDeviceMapping.
///
/// Describes a block device mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockDeviceMapping {
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(rename = "VirtualName", skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    pub ebs: Option<EbsBlockDevice>,
    #[serde(rename = "NoDevice", skip_serializing_if = "Option::is_none")]
    pub no_device: Option<String>,
}

impl BlockDeviceMapping {
    /// Returns the `DeviceName` member.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Sets the `DeviceName` member, replacing any previous value.
    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    /// Sets the `DeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Returns the `VirtualName` member.
    #[must_use]
    pub fn virtual_name(&self) -> Option<&str> {
        self.virtual_name.as_deref()
    }

    /// Sets the `VirtualName` member, replacing any previous value.
    pub fn set_virtual_name(&mut self, virtual_name: Option<String>) {
        self.virtual_name = virtual_name;
    }

    /// Sets the `VirtualName` member and returns the updated value.
    #[must_use]
    pub fn with_virtual_name(mut self, virtual_name: impl Into<String>) -> Self {
        self.virtual_name = Some(virtual_name.into());
        self
    }

    /// Returns the `Ebs` member.
    #[must_use]
    pub fn ebs(&self) -> Option<&EbsBlockDevice> {
        self.ebs.as_ref()
    }

    /// Sets the `Ebs` member, replacing any previous value.
    pub fn set_ebs(&mut self, ebs: Option<EbsBlockDevice>) {
        self.ebs = ebs;
    }

    /// Sets the `Ebs` member and returns the updated value.
    #[must_use]
    pub fn with_ebs(mut self, ebs: impl Into<EbsBlockDevice>) -> Self {
        self.ebs = Some(ebs.into());
        self
    }

    /// Returns the `NoDevice` member.
    #[must_use]
    pub fn no_device(&self) -> Option<&str> {
        self.no_device.as_deref()
    }

    /// Sets the `NoDevice` member, replacing any previous value.
    pub fn set_no_device(&mut self, no_device: Option<String>) {
        self.no_device = no_device;
    }

    /// Sets the `NoDevice` member and returns the updated value.
    #[must_use]
    pub fn with_no_device(mut self, no_device: impl Into<String>) -> Self {
        self.no_device = Some(no_device.into());
        self
    }
}

impl Shape for BlockDeviceMapping {
    const SHAPE_NAME: &'static str = "BlockDeviceMapping";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DeviceName", false, self.device_name.as_ref()),
            Member::new("VirtualName", false, self.virtual_name.as_ref()),
            Member::new("Ebs", false, self.ebs.as_ref()),
            Member::new("NoDevice", false, self.no_device.as_ref()),
        ]
    }
}

impl fmt::Display for BlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CapacityReservation.
///
/// Describes a Capacity Reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityReservation {
    #[serde(rename = "CapacityReservationId", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "CapacityReservationArn", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_arn: Option<String>,
    #[serde(rename = "AvailabilityZoneId", skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(rename = "InstancePlatform", skip_serializing_if = "Option::is_none")]
    pub instance_platform: Option<CapacityReservationInstancePlatform>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<CapacityReservationTenancy>,
    #[serde(rename = "TotalInstanceCount", skip_serializing_if = "Option::is_none")]
    pub total_instance_count: Option<i32>,
    /// The remaining capacity.
    #[serde(rename = "AvailableInstanceCount", skip_serializing_if = "Option::is_none")]
    pub available_instance_count: Option<i32>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "EphemeralStorage", skip_serializing_if = "Option::is_none")]
    pub ephemeral_storage: Option<bool>,
    /// The current state of the Capacity Reservation.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<CapacityReservationState>,
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(rename = "EndDateType", skip_serializing_if = "Option::is_none")]
    pub end_date_type: Option<EndDateType>,
    #[serde(rename = "InstanceMatchCriteria", skip_serializing_if = "Option::is_none")]
    pub instance_match_criteria: Option<InstanceMatchCriteria>,
    #[serde(rename = "CreateDate", skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CapacityReservation {
    /// Returns the `CapacityReservationId` member.
    #[must_use]
    pub fn capacity_reservation_id(&self) -> Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    /// Sets the `CapacityReservationId` member, replacing any previous value.
    pub fn set_capacity_reservation_id(&mut self, capacity_reservation_id: Option<String>) {
        self.capacity_reservation_id = capacity_reservation_id;
    }

    /// Sets the `CapacityReservationId` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_id(
        mut self,
        capacity_reservation_id: impl Into<String>,
    ) -> Self {
        self.capacity_reservation_id = Some(capacity_reservation_id.into());
        self
    }

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `CapacityReservationArn` member.
    #[must_use]
    pub fn capacity_reservation_arn(&self) -> Option<&str> {
        self.capacity_reservation_arn.as_deref()
    }

    /// Sets the `CapacityReservationArn` member, replacing any previous value.
    pub fn set_capacity_reservation_arn(&mut self, capacity_reservation_arn: Option<String>) {
        self.capacity_reservation_arn = capacity_reservation_arn;
    }

    /// Sets the `CapacityReservationArn` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_arn(
        mut self,
        capacity_reservation_arn: impl Into<String>,
    ) -> Self {
        self.capacity_reservation_arn = Some(capacity_reservation_arn.into());
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

    /// Returns the `TotalInstanceCount` member.
    #[must_use]
    pub fn total_instance_count(&self) -> Option<i32> {
        self.total_instance_count
    }

    /// Sets the `TotalInstanceCount` member, replacing any previous value.
    pub fn set_total_instance_count(&mut self, total_instance_count: Option<i32>) {
        self.total_instance_count = total_instance_count;
    }

    /// Sets the `TotalInstanceCount` member and returns the updated value.
    #[must_use]
    pub fn with_total_instance_count(mut self, total_instance_count: impl Into<i32>) -> Self {
        self.total_instance_count = Some(total_instance_count.into());
        self
    }

    /// Returns the `AvailableInstanceCount` member.
    #[must_use]
    pub fn available_instance_count(&self) -> Option<i32> {
        self.available_instance_count
    }

    /// Sets the `AvailableInstanceCount` member, replacing any previous value.
    pub fn set_available_instance_count(&mut self, available_instance_count: Option<i32>) {
        self.available_instance_count = available_instance_count;
    }

    /// Sets the `AvailableInstanceCount` member and returns the updated value.
    #[must_use]
    pub fn with_available_instance_count(
        mut self,
        available_instance_count: impl Into<i32>,
    ) -> Self {
        self.available_instance_count = Some(available_instance_count.into());
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

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&CapacityReservationState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<CapacityReservationState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<CapacityReservationState>) -> Self {
        self.state = Some(state.into());
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

    /// Returns the `CreateDate` member.
    #[must_use]
    pub fn create_date(&self) -> Option<&DateTime<Utc>> {
        self.create_date.as_ref()
    }

    /// Sets the `CreateDate` member, replacing any previous value.
    pub fn set_create_date(&mut self, create_date: Option<DateTime<Utc>>) {
        self.create_date = create_date;
    }

    /// Sets the `CreateDate` member and returns the updated value.
    #[must_use]
    pub fn with_create_date(mut self, create_date: impl Into<DateTime<Utc>>) -> Self {
        self.create_date = Some(create_date.into());
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

impl Shape for CapacityReservation {
    const SHAPE_NAME: &'static str = "CapacityReservation";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CapacityReservationId", false, self.capacity_reservation_id.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("CapacityReservationArn", false, self.capacity_reservation_arn.as_ref()),
            Member::new("AvailabilityZoneId", false, self.availability_zone_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("InstancePlatform", false, self.instance_platform.as_ref()),
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Tenancy", false, self.tenancy.as_ref()),
            Member::new("TotalInstanceCount", false, self.total_instance_count.as_ref()),
            Member::new("AvailableInstanceCount", false, self.available_instance_count.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("EphemeralStorage", false, self.ephemeral_storage.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("EndDate", false, self.end_date.as_ref()),
            Member::new("EndDateType", false, self.end_date_type.as_ref()),
            Member::new("InstanceMatchCriteria", false, self.instance_match_criteria.as_ref()),
            Member::new("CreateDate", false, self.create_date.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for CapacityReservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CapacityReservationOptions.
///
/// Describes the strategy for using unused Capacity Reservations for fulfilling On-Demand capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityReservationOptions {
    #[serde(rename = "UsageStrategy", skip_serializing_if = "Option::is_none")]
    pub usage_strategy: Option<FleetCapacityReservationUsageStrategy>,
}

impl CapacityReservationOptions {
    /// Returns the `UsageStrategy` member.
    #[must_use]
    pub fn usage_strategy(&self) -> Option<&FleetCapacityReservationUsageStrategy> {
        self.usage_strategy.as_ref()
    }

    /// Sets the `UsageStrategy` member, replacing any previous value.
    pub fn set_usage_strategy(
        &mut self,
        usage_strategy: Option<FleetCapacityReservationUsageStrategy>,
    ) {
        self.usage_strategy = usage_strategy;
    }

    /// Sets the `UsageStrategy` member and returns the updated value.
    #[must_use]
    pub fn with_usage_strategy(
        mut self,
        usage_strategy: impl Into<FleetCapacityReservationUsageStrategy>,
    ) -> Self {
        self.usage_strategy = Some(usage_strategy.into());
        self
    }
}

impl Shape for CapacityReservationOptions {
    const SHAPE_NAME: &'static str = "CapacityReservationOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("UsageStrategy", false, self.usage_strategy.as_ref()),
        ]
    }
}

impl fmt::Display for CapacityReservationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CapacityReservationSpecification.
///
/// Describes an instance's Capacity Reservation targeting option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityReservationSpecification {
    #[serde(rename = "CapacityReservationPreference", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_preference: Option<CapacityReservationPreference>,
    #[serde(rename = "CapacityReservationTarget", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_target: Option<CapacityReservationTarget>,
}

impl CapacityReservationSpecification {
    /// Returns the `CapacityReservationPreference` member.
    #[must_use]
    pub fn capacity_reservation_preference(&self) -> Option<&CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// Sets the `CapacityReservationPreference` member, replacing any previous value.
    pub fn set_capacity_reservation_preference(
        &mut self,
        capacity_reservation_preference: Option<CapacityReservationPreference>,
    ) {
        self.capacity_reservation_preference = capacity_reservation_preference;
    }

    /// Sets the `CapacityReservationPreference` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_preference(
        mut self,
        capacity_reservation_preference: impl Into<CapacityReservationPreference>,
    ) -> Self {
        self.capacity_reservation_preference = Some(capacity_reservation_preference.into());
        self
    }

    /// Returns the `CapacityReservationTarget` member.
    #[must_use]
    pub fn capacity_reservation_target(&self) -> Option<&CapacityReservationTarget> {
        self.capacity_reservation_target.as_ref()
    }

    /// Sets the `CapacityReservationTarget` member, replacing any previous value.
    pub fn set_capacity_reservation_target(
        &mut self,
        capacity_reservation_target: Option<CapacityReservationTarget>,
    ) {
        self.capacity_reservation_target = capacity_reservation_target;
    }

    /// Sets the `CapacityReservationTarget` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_target(
        mut self,
        capacity_reservation_target: impl Into<CapacityReservationTarget>,
    ) -> Self {
        self.capacity_reservation_target = Some(capacity_reservation_target.into());
        self
    }
}

impl Shape for CapacityReservationSpecification {
    const SHAPE_NAME: &'static str = "CapacityReservationSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "CapacityReservationPreference",
                false,
                self.capacity_reservation_preference.as_ref(),
            ),
            Member::new(
                "CapacityReservationTarget",
                false,
                self.capacity_reservation_target.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for CapacityReservationSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CapacityReservationSpecificationResponse.
///
/// Describes the instance's Capacity Reservation targeting preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityReservationSpecificationResponse {
    #[serde(rename = "CapacityReservationPreference", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_preference: Option<CapacityReservationPreference>,
    #[serde(rename = "CapacityReservationTarget", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_target: Option<CapacityReservationTargetResponse>,
}

impl CapacityReservationSpecificationResponse {
    /// Returns the `CapacityReservationPreference` member.
    #[must_use]
    pub fn capacity_reservation_preference(&self) -> Option<&CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// Sets the `CapacityReservationPreference` member, replacing any previous value.
    pub fn set_capacity_reservation_preference(
        &mut self,
        capacity_reservation_preference: Option<CapacityReservationPreference>,
    ) {
        self.capacity_reservation_preference = capacity_reservation_preference;
    }

    /// Sets the `CapacityReservationPreference` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_preference(
        mut self,
        capacity_reservation_preference: impl Into<CapacityReservationPreference>,
    ) -> Self {
        self.capacity_reservation_preference = Some(capacity_reservation_preference.into());
        self
    }

    /// Returns the `CapacityReservationTarget` member.
    #[must_use]
    pub fn capacity_reservation_target(&self) -> Option<&CapacityReservationTargetResponse> {
        self.capacity_reservation_target.as_ref()
    }

    /// Sets the `CapacityReservationTarget` member, replacing any previous value.
    pub fn set_capacity_reservation_target(
        &mut self,
        capacity_reservation_target: Option<CapacityReservationTargetResponse>,
    ) {
        self.capacity_reservation_target = capacity_reservation_target;
    }

    /// Sets the `CapacityReservationTarget` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_target(
        mut self,
        capacity_reservation_target: impl Into<CapacityReservationTargetResponse>,
    ) -> Self {
        self.capacity_reservation_target = Some(capacity_reservation_target.into());
        self
    }
}

impl Shape for CapacityReservationSpecificationResponse {
    const SHAPE_NAME: &'static str = "CapacityReservationSpecificationResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "CapacityReservationPreference",
                false,
                self.capacity_reservation_preference.as_ref(),
            ),
            Member::new(
                "CapacityReservationTarget",
                false,
                self.capacity_reservation_target.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for CapacityReservationSpecificationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CapacityReservationTarget.
///
/// Describes a target Capacity Reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityReservationTarget {
    #[serde(rename = "CapacityReservationId", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_id: Option<String>,
}

impl CapacityReservationTarget {
    /// Returns the `CapacityReservationId` member.
    #[must_use]
    pub fn capacity_reservation_id(&self) -> Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    /// Sets the `CapacityReservationId` member, replacing any previous value.
    pub fn set_capacity_reservation_id(&mut self, capacity_reservation_id: Option<String>) {
        self.capacity_reservation_id = capacity_reservation_id;
    }

    /// Sets the `CapacityReservationId` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_id(
        mut self,
        capacity_reservation_id: impl Into<String>,
    ) -> Self {
        self.capacity_reservation_id = Some(capacity_reservation_id.into());
        self
    }
}

impl Shape for CapacityReservationTarget {
    const SHAPE_NAME: &'static str = "CapacityReservationTarget";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CapacityReservationId", false, self.capacity_reservation_id.as_ref()),
        ]
    }
}

impl fmt::Display for CapacityReservationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CapacityReservationTargetResponse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityReservationTargetResponse {
    #[serde(rename = "CapacityReservationId", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_id: Option<String>,
}

impl CapacityReservationTargetResponse {
    /// Returns the `CapacityReservationId` member.
    #[must_use]
    pub fn capacity_reservation_id(&self) -> Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    /// Sets the `CapacityReservationId` member, replacing any previous value.
    pub fn set_capacity_reservation_id(&mut self, capacity_reservation_id: Option<String>) {
        self.capacity_reservation_id = capacity_reservation_id;
    }

    /// Sets the `CapacityReservationId` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_id(
        mut self,
        capacity_reservation_id: impl Into<String>,
    ) -> Self {
        self.capacity_reservation_id = Some(capacity_reservation_id.into());
        self
    }
}

impl Shape for CapacityReservationTargetResponse {
    const SHAPE_NAME: &'static str = "CapacityReservationTargetResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CapacityReservationId", false, self.capacity_reservation_id.as_ref()),
        ]
    }
}

impl fmt::Display for CapacityReservationTargetResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ClassicLoadBalancer.
///
/// Describes a Classic Load Balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicLoadBalancer {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ClassicLoadBalancer {
    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Shape for ClassicLoadBalancer {
    const SHAPE_NAME: &'static str = "ClassicLoadBalancer";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Name", false, self.name.as_ref()),
        ]
    }
}

impl fmt::Display for ClassicLoadBalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ClassicLoadBalancersConfig.
///
/// Describes the Classic Load Balancers to attach to a Spot Fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicLoadBalancersConfig {
    #[serde(rename = "ClassicLoadBalancers", skip_serializing_if = "Option::is_none")]
    pub classic_load_balancers: Option<Vec<ClassicLoadBalancer>>,
}

impl ClassicLoadBalancersConfig {
    /// Returns the `ClassicLoadBalancers` member.
    #[must_use]
    pub fn classic_load_balancers(&self) -> Option<&[ClassicLoadBalancer]> {
        self.classic_load_balancers.as_deref()
    }

    /// Sets the `ClassicLoadBalancers` member, replacing any previous value.
    pub fn set_classic_load_balancers(
        &mut self,
        classic_load_balancers: Option<Vec<ClassicLoadBalancer>>,
    ) {
        self.classic_load_balancers = classic_load_balancers;
    }

    /// Appends to the `ClassicLoadBalancers` member and returns the updated value.
    #[must_use]
    pub fn with_classic_load_balancers(
        mut self,
        classic_load_balancers: impl IntoIterator<Item = impl Into<ClassicLoadBalancer>>,
    ) -> Self {
        self.classic_load_balancers
            .get_or_insert_with(Vec::new)
            .extend(classic_load_balancers.into_iter().map(Into::into));
        self
    }
}

impl Shape for ClassicLoadBalancersConfig {
    const SHAPE_NAME: &'static str = "ClassicLoadBalancersConfig";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ClassicLoadBalancers", false, self.classic_load_balancers.as_ref()),
        ]
    }
}

impl fmt::Display for ClassicLoadBalancersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ClientData.
///
/// Describes the client-specific data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientData {
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "UploadEnd", skip_serializing_if = "Option::is_none")]
    pub upload_end: Option<DateTime<Utc>>,
    /// The size of the uploaded disk image, in GiB.
    #[serde(rename = "UploadSize", skip_serializing_if = "Option::is_none")]
    pub upload_size: Option<f64>,
    #[serde(rename = "UploadStart", skip_serializing_if = "Option::is_none")]
    pub upload_start: Option<DateTime<Utc>>,
}

impl ClientData {
    /// Returns the `Comment` member.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Sets the `Comment` member, replacing any previous value.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// Sets the `Comment` member and returns the updated value.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the `UploadEnd` member.
    #[must_use]
    pub fn upload_end(&self) -> Option<&DateTime<Utc>> {
        self.upload_end.as_ref()
    }

    /// Sets the `UploadEnd` member, replacing any previous value.
    pub fn set_upload_end(&mut self, upload_end: Option<DateTime<Utc>>) {
        self.upload_end = upload_end;
    }

    /// Sets the `UploadEnd` member and returns the updated value.
    #[must_use]
    pub fn with_upload_end(mut self, upload_end: impl Into<DateTime<Utc>>) -> Self {
        self.upload_end = Some(upload_end.into());
        self
    }

    /// Returns the `UploadSize` member.
    #[must_use]
    pub fn upload_size(&self) -> Option<f64> {
        self.upload_size
    }

    /// Sets the `UploadSize` member, replacing any previous value.
    pub fn set_upload_size(&mut self, upload_size: Option<f64>) {
        self.upload_size = upload_size;
    }

    /// Sets the `UploadSize` member and returns the updated value.
    #[must_use]
    pub fn with_upload_size(mut self, upload_size: impl Into<f64>) -> Self {
        self.upload_size = Some(upload_size.into());
        self
    }

    /// Returns the `UploadStart` member.
    #[must_use]
    pub fn upload_start(&self) -> Option<&DateTime<Utc>> {
        self.upload_start.as_ref()
    }

    /// Sets the `UploadStart` member, replacing any previous value.
    pub fn set_upload_start(&mut self, upload_start: Option<DateTime<Utc>>) {
        self.upload_start = upload_start;
    }

    /// Sets the `UploadStart` member and returns the updated value.
    #[must_use]
    pub fn with_upload_start(mut self, upload_start: impl Into<DateTime<Utc>>) -> Self {
        self.upload_start = Some(upload_start.into());
        self
    }
}

impl Shape for ClientData {
    const SHAPE_NAME: &'static str = "ClientData";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Comment", false, self.comment.as_ref()),
            Member::new("UploadEnd", false, self.upload_end.as_ref()),
            Member::new("UploadSize", false, self.upload_size.as_ref()),
            Member::new("UploadStart", false, self.upload_start.as_ref()),
        ]
    }
}

impl PartialEq for ClientData {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for ClientData {}

impl Hash for ClientData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for ClientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CpuOptions.
///
/// The CPU options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuOptions {
    #[serde(rename = "CoreCount", skip_serializing_if = "Option::is_none")]
    pub core_count: Option<i32>,
    #[serde(rename = "ThreadsPerCore", skip_serializing_if = "Option::is_none")]
    pub threads_per_core: Option<i32>,
}

impl CpuOptions {
    /// Returns the `CoreCount` member.
    #[must_use]
    pub fn core_count(&self) -> Option<i32> {
        self.core_count
    }

    /// Sets the `CoreCount` member, replacing any previous value.
    pub fn set_core_count(&mut self, core_count: Option<i32>) {
        self.core_count = core_count;
    }

    /// Sets the `CoreCount` member and returns the updated value.
    #[must_use]
    pub fn with_core_count(mut self, core_count: impl Into<i32>) -> Self {
        self.core_count = Some(core_count.into());
        self
    }

    /// Returns the `ThreadsPerCore` member.
    #[must_use]
    pub fn threads_per_core(&self) -> Option<i32> {
        self.threads_per_core
    }

    /// Sets the `ThreadsPerCore` member, replacing any previous value.
    pub fn set_threads_per_core(&mut self, threads_per_core: Option<i32>) {
        self.threads_per_core = threads_per_core;
    }

    /// Sets the `ThreadsPerCore` member and returns the updated value.
    #[must_use]
    pub fn with_threads_per_core(mut self, threads_per_core: impl Into<i32>) -> Self {
        self.threads_per_core = Some(threads_per_core.into());
        self
    }
}

impl Shape for CpuOptions {
    const SHAPE_NAME: &'static str = "CpuOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CoreCount", false, self.core_count.as_ref()),
            Member::new("ThreadsPerCore", false, self.threads_per_core.as_ref()),
        ]
    }
}

impl fmt::Display for CpuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CpuOptionsRequest.
///
/// The CPU options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CpuOptionsRequest {
    #[serde(rename = "CoreCount", skip_serializing_if = "Option::is_none")]
    pub core_count: Option<i32>,
    #[serde(rename = "ThreadsPerCore", skip_serializing_if = "Option::is_none")]
    pub threads_per_core: Option<i32>,
}

impl CpuOptionsRequest {
    /// Returns the `CoreCount` member.
    #[must_use]
    pub fn core_count(&self) -> Option<i32> {
        self.core_count
    }

    /// Sets the `CoreCount` member, replacing any previous value.
    pub fn set_core_count(&mut self, core_count: Option<i32>) {
        self.core_count = core_count;
    }

    /// Sets the `CoreCount` member and returns the updated value.
    #[must_use]
    pub fn with_core_count(mut self, core_count: impl Into<i32>) -> Self {
        self.core_count = Some(core_count.into());
        self
    }

    /// Returns the `ThreadsPerCore` member.
    #[must_use]
    pub fn threads_per_core(&self) -> Option<i32> {
        self.threads_per_core
    }

    /// Sets the `ThreadsPerCore` member, replacing any previous value.
    pub fn set_threads_per_core(&mut self, threads_per_core: Option<i32>) {
        self.threads_per_core = threads_per_core;
    }

    /// Sets the `ThreadsPerCore` member and returns the updated value.
    #[must_use]
    pub fn with_threads_per_core(mut self, threads_per_core: impl Into<i32>) -> Self {
        self.threads_per_core = Some(threads_per_core.into());
        self
    }
}

impl Shape for CpuOptionsRequest {
    const SHAPE_NAME: &'static str = "CpuOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CoreCount", false, self.core_count.as_ref()),
            Member::new("ThreadsPerCore", false, self.threads_per_core.as_ref()),
        ]
    }
}

impl fmt::Display for CpuOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CreditSpecification.
///
/// Describes the credit option for CPU usage of a T2 or T3 instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditSpecification {
    #[serde(rename = "CpuCredits", skip_serializing_if = "Option::is_none")]
    pub cpu_credits: Option<String>,
}

impl CreditSpecification {
    /// Returns the `CpuCredits` member.
    #[must_use]
    pub fn cpu_credits(&self) -> Option<&str> {
        self.cpu_credits.as_deref()
    }

    /// Sets the `CpuCredits` member, replacing any previous value.
    pub fn set_cpu_credits(&mut self, cpu_credits: Option<String>) {
        self.cpu_credits = cpu_credits;
    }

    /// Sets the `CpuCredits` member and returns the updated value.
    #[must_use]
    pub fn with_cpu_credits(mut self, cpu_credits: impl Into<String>) -> Self {
        self.cpu_credits = Some(cpu_credits.into());
        self
    }
}

impl Shape for CreditSpecification {
    const SHAPE_NAME: &'static str = "CreditSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CpuCredits", false, self.cpu_credits.as_ref()),
        ]
    }
}

impl fmt::Display for CreditSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 CreditSpecificationRequest.
///
/// The credit option for CPU usage of a T2 or T3 instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreditSpecificationRequest {
    /// The credit option for CPU usage of a T2 or T3 instance.
    #[serde(rename = "CpuCredits", skip_serializing_if = "Option::is_none")]
    pub cpu_credits: Option<String>,
}

impl CreditSpecificationRequest {
    /// Returns the `CpuCredits` member.
    #[must_use]
    pub fn cpu_credits(&self) -> Option<&str> {
        self.cpu_credits.as_deref()
    }

    /// Sets the `CpuCredits` member, replacing any previous value.
    pub fn set_cpu_credits(&mut self, cpu_credits: Option<String>) {
        self.cpu_credits = cpu_credits;
    }

    /// Sets the `CpuCredits` member and returns the updated value.
    #[must_use]
    pub fn with_cpu_credits(mut self, cpu_credits: impl Into<String>) -> Self {
        self.cpu_credits = Some(cpu_credits.into());
        self
    }
}

impl Shape for CreditSpecificationRequest {
    const SHAPE_NAME: &'static str = "CreditSpecificationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CpuCredits", true, self.cpu_credits.as_ref()),
        ]
    }
}

impl fmt::Display for CreditSpecificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeFleetError.
///
/// Describes the instances that could not be launched by the fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeFleetError {
    #[serde(rename = "LaunchTemplateAndOverrides", skip_serializing_if = "Option::is_none")]
    pub launch_template_and_overrides: Option<LaunchTemplateAndOverridesResponse>,
    #[serde(rename = "Lifecycle", skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<InstanceLifecycle>,
    #[serde(rename = "ErrorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(rename = "ErrorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DescribeFleetError {
    /// Returns the `LaunchTemplateAndOverrides` member.
    #[must_use]
    pub fn launch_template_and_overrides(&self) -> Option<&LaunchTemplateAndOverridesResponse> {
        self.launch_template_and_overrides.as_ref()
    }

    /// Sets the `LaunchTemplateAndOverrides` member, replacing any previous value.
    pub fn set_launch_template_and_overrides(
        &mut self,
        launch_template_and_overrides: Option<LaunchTemplateAndOverridesResponse>,
    ) {
        self.launch_template_and_overrides = launch_template_and_overrides;
    }

    /// Sets the `LaunchTemplateAndOverrides` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_and_overrides(
        mut self,
        launch_template_and_overrides: impl Into<LaunchTemplateAndOverridesResponse>,
    ) -> Self {
        self.launch_template_and_overrides = Some(launch_template_and_overrides.into());
        self
    }

    /// Returns the `Lifecycle` member.
    #[must_use]
    pub fn lifecycle(&self) -> Option<&InstanceLifecycle> {
        self.lifecycle.as_ref()
    }

    /// Sets the `Lifecycle` member, replacing any previous value.
    pub fn set_lifecycle(&mut self, lifecycle: Option<InstanceLifecycle>) {
        self.lifecycle = lifecycle;
    }

    /// Sets the `Lifecycle` member and returns the updated value.
    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: impl Into<InstanceLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle.into());
        self
    }

    /// Returns the `ErrorCode` member.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Sets the `ErrorCode` member, replacing any previous value.
    pub fn set_error_code(&mut self, error_code: Option<String>) {
        self.error_code = error_code;
    }

    /// Sets the `ErrorCode` member and returns the updated value.
    #[must_use]
    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    /// Returns the `ErrorMessage` member.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Sets the `ErrorMessage` member, replacing any previous value.
    pub fn set_error_message(&mut self, error_message: Option<String>) {
        self.error_message = error_message;
    }

    /// Sets the `ErrorMessage` member and returns the updated value.
    #[must_use]
    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }
}

impl Shape for DescribeFleetError {
    const SHAPE_NAME: &'static str = "DescribeFleetError";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "LaunchTemplateAndOverrides",
                false,
                self.launch_template_and_overrides.as_ref(),
            ),
            Member::new("Lifecycle", false, self.lifecycle.as_ref()),
            Member::new("ErrorCode", false, self.error_code.as_ref()),
            Member::new("ErrorMessage", false, self.error_message.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeFleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DescribeFleetsInstances.
///
/// Describes the instances that were launched by the fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeFleetsInstances {
    #[serde(rename = "LaunchTemplateAndOverrides", skip_serializing_if = "Option::is_none")]
    pub launch_template_and_overrides: Option<LaunchTemplateAndOverridesResponse>,
    #[serde(rename = "Lifecycle", skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<InstanceLifecycle>,
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    pub instance_ids: Option<Vec<String>>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformValues>,
}

impl DescribeFleetsInstances {
    /// Returns the `LaunchTemplateAndOverrides` member.
    #[must_use]
    pub fn launch_template_and_overrides(&self) -> Option<&LaunchTemplateAndOverridesResponse> {
        self.launch_template_and_overrides.as_ref()
    }

    /// Sets the `LaunchTemplateAndOverrides` member, replacing any previous value.
    pub fn set_launch_template_and_overrides(
        &mut self,
        launch_template_and_overrides: Option<LaunchTemplateAndOverridesResponse>,
    ) {
        self.launch_template_and_overrides = launch_template_and_overrides;
    }

    /// Sets the `LaunchTemplateAndOverrides` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_and_overrides(
        mut self,
        launch_template_and_overrides: impl Into<LaunchTemplateAndOverridesResponse>,
    ) -> Self {
        self.launch_template_and_overrides = Some(launch_template_and_overrides.into());
        self
    }

    /// Returns the `Lifecycle` member.
    #[must_use]
    pub fn lifecycle(&self) -> Option<&InstanceLifecycle> {
        self.lifecycle.as_ref()
    }

    /// Sets the `Lifecycle` member, replacing any previous value.
    pub fn set_lifecycle(&mut self, lifecycle: Option<InstanceLifecycle>) {
        self.lifecycle = lifecycle;
    }

    /// Sets the `Lifecycle` member and returns the updated value.
    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: impl Into<InstanceLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle.into());
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

    /// Returns the `Platform` member.
    #[must_use]
    pub fn platform(&self) -> Option<&PlatformValues> {
        self.platform.as_ref()
    }

    /// Sets the `Platform` member, replacing any previous value.
    pub fn set_platform(&mut self, platform: Option<PlatformValues>) {
        self.platform = platform;
    }

    /// Sets the `Platform` member and returns the updated value.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<PlatformValues>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

impl Shape for DescribeFleetsInstances {
    const SHAPE_NAME: &'static str = "DescribeFleetsInstances";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "LaunchTemplateAndOverrides",
                false,
                self.launch_template_and_overrides.as_ref(),
            ),
            Member::new("Lifecycle", false, self.lifecycle.as_ref()),
            Member::new("InstanceIds", false, self.instance_ids.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("Platform", false, self.platform.as_ref()),
        ]
    }
}

impl fmt::Display for DescribeFleetsInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 DiskInfo.
///
/// Describes the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskInfo {
    #[serde(rename = "SizeInGB", skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<i64>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DiskType>,
}

impl DiskInfo {
    /// Returns the `SizeInGB` member.
    #[must_use]
    pub fn size_in_gb(&self) -> Option<i64> {
        self.size_in_gb
    }

    /// Sets the `SizeInGB` member, replacing any previous value.
    pub fn set_size_in_gb(&mut self, size_in_gb: Option<i64>) {
        self.size_in_gb = size_in_gb;
    }

    /// Sets the `SizeInGB` member and returns the updated value.
    #[must_use]
    pub fn with_size_in_gb(mut self, size_in_gb: impl Into<i64>) -> Self {
        self.size_in_gb = Some(size_in_gb.into());
        self
    }

    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Returns the `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&DiskType> {
        self.r#type.as_ref()
    }

    /// Sets the `Type` member, replacing any previous value.
    pub fn set_type(&mut self, r#type: Option<DiskType>) {
        self.r#type = r#type;
    }

    /// Sets the `Type` member and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<DiskType>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }
}

impl Shape for DiskInfo {
    const SHAPE_NAME: &'static str = "DiskInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SizeInGB", false, self.size_in_gb.as_ref()),
            Member::new("Count", false, self.count.as_ref()),
            Member::new("Type", false, self.r#type.as_ref()),
        ]
    }
}

impl fmt::Display for DiskInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 EbsBlockDevice.
///
/// Describes a block device for an EBS volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EbsBlockDevice {
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// The size of the volume, in GiB.
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

impl EbsBlockDevice {
    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
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

    /// Returns the `VolumeSize` member.
    #[must_use]
    pub fn volume_size(&self) -> Option<i32> {
        self.volume_size
    }

    /// Sets the `VolumeSize` member, replacing any previous value.
    pub fn set_volume_size(&mut self, volume_size: Option<i32>) {
        self.volume_size = volume_size;
    }

    /// Sets the `VolumeSize` member and returns the updated value.
    #[must_use]
    pub fn with_volume_size(mut self, volume_size: impl Into<i32>) -> Self {
        self.volume_size = Some(volume_size.into());
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
}

impl Shape for EbsBlockDevice {
    const SHAPE_NAME: &'static str = "EbsBlockDevice";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Iops", false, self.iops.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("VolumeSize", false, self.volume_size.as_ref()),
            Member::new("VolumeType", false, self.volume_type.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("Encrypted", false, self.encrypted.as_ref()),
        ]
    }
}

impl fmt::Display for EbsBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 EbsInfo.
///
/// Describes the Amazon EBS features supported by the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EbsInfo {
    #[serde(rename = "EbsOptimizedSupport", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized_support: Option<EbsOptimizedSupport>,
    #[serde(rename = "EncryptionSupport", skip_serializing_if = "Option::is_none")]
    pub encryption_support: Option<EbsEncryptionSupport>,
    #[serde(rename = "NvmeSupport", skip_serializing_if = "Option::is_none")]
    pub nvme_support: Option<EbsNvmeSupport>,
}

impl EbsInfo {
    /// Returns the `EbsOptimizedSupport` member.
    #[must_use]
    pub fn ebs_optimized_support(&self) -> Option<&EbsOptimizedSupport> {
        self.ebs_optimized_support.as_ref()
    }

    /// Sets the `EbsOptimizedSupport` member, replacing any previous value.
    pub fn set_ebs_optimized_support(
        &mut self,
        ebs_optimized_support: Option<EbsOptimizedSupport>,
    ) {
        self.ebs_optimized_support = ebs_optimized_support;
    }

    /// Sets the `EbsOptimizedSupport` member and returns the updated value.
    #[must_use]
    pub fn with_ebs_optimized_support(
        mut self,
        ebs_optimized_support: impl Into<EbsOptimizedSupport>,
    ) -> Self {
        self.ebs_optimized_support = Some(ebs_optimized_support.into());
        self
    }

    /// Returns the `EncryptionSupport` member.
    #[must_use]
    pub fn encryption_support(&self) -> Option<&EbsEncryptionSupport> {
        self.encryption_support.as_ref()
    }

    /// Sets the `EncryptionSupport` member, replacing any previous value.
    pub fn set_encryption_support(&mut self, encryption_support: Option<EbsEncryptionSupport>) {
        self.encryption_support = encryption_support;
    }

    /// Sets the `EncryptionSupport` member and returns the updated value.
    #[must_use]
    pub fn with_encryption_support(
        mut self,
        encryption_support: impl Into<EbsEncryptionSupport>,
    ) -> Self {
        self.encryption_support = Some(encryption_support.into());
        self
    }

    /// Returns the `NvmeSupport` member.
    #[must_use]
    pub fn nvme_support(&self) -> Option<&EbsNvmeSupport> {
        self.nvme_support.as_ref()
    }

    /// Sets the `NvmeSupport` member, replacing any previous value.
    pub fn set_nvme_support(&mut self, nvme_support: Option<EbsNvmeSupport>) {
        self.nvme_support = nvme_support;
    }

    /// Sets the `NvmeSupport` member and returns the updated value.
    #[must_use]
    pub fn with_nvme_support(mut self, nvme_support: impl Into<EbsNvmeSupport>) -> Self {
        self.nvme_support = Some(nvme_support.into());
        self
    }
}

impl Shape for EbsInfo {
    const SHAPE_NAME: &'static str = "EbsInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("EbsOptimizedSupport", false, self.ebs_optimized_support.as_ref()),
            Member::new("EncryptionSupport", false, self.encryption_support.as_ref()),
            Member::new("NvmeSupport", false, self.nvme_support.as_ref()),
        ]
    }
}

impl fmt::Display for EbsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 EbsInstanceBlockDevice.
///
/// Describes a parameter used to set up an EBS volume in a block device mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EbsInstanceBlockDevice {
    #[serde(rename = "AttachTime", skip_serializing_if = "Option::is_none")]
    pub attach_time: Option<DateTime<Utc>>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<AttachmentStatus>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
}

impl EbsInstanceBlockDevice {
    /// Returns the `AttachTime` member.
    #[must_use]
    pub fn attach_time(&self) -> Option<&DateTime<Utc>> {
        self.attach_time.as_ref()
    }

    /// Sets the `AttachTime` member, replacing any previous value.
    pub fn set_attach_time(&mut self, attach_time: Option<DateTime<Utc>>) {
        self.attach_time = attach_time;
    }

    /// Sets the `AttachTime` member and returns the updated value.
    #[must_use]
    pub fn with_attach_time(mut self, attach_time: impl Into<DateTime<Utc>>) -> Self {
        self.attach_time = Some(attach_time.into());
        self
    }

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&AttachmentStatus> {
        self.status.as_ref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<AttachmentStatus>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<AttachmentStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the `VolumeId` member.
    #[must_use]
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }

    /// Sets the `VolumeId` member, replacing any previous value.
    pub fn set_volume_id(&mut self, volume_id: Option<String>) {
        self.volume_id = volume_id;
    }

    /// Sets the `VolumeId` member and returns the updated value.
    #[must_use]
    pub fn with_volume_id(mut self, volume_id: impl Into<String>) -> Self {
        self.volume_id = Some(volume_id.into());
        self
    }
}

impl Shape for EbsInstanceBlockDevice {
    const SHAPE_NAME: &'static str = "EbsInstanceBlockDevice";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AttachTime", false, self.attach_time.as_ref()),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("VolumeId", false, self.volume_id.as_ref()),
        ]
    }
}

impl fmt::Display for EbsInstanceBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ElasticGpuSpecification.
///
/// A specification for an Elastic Graphics accelerator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElasticGpuSpecification {
    /// The type of Elastic Graphics accelerator.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl ElasticGpuSpecification {
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
}

impl Shape for ElasticGpuSpecification {
    const SHAPE_NAME: &'static str = "ElasticGpuSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Type", true, self.r#type.as_ref()),
        ]
    }
}

impl fmt::Display for ElasticGpuSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ElasticGpuSpecificationResponse.
///
/// Describes an elastic GPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElasticGpuSpecificationResponse {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl ElasticGpuSpecificationResponse {
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
}

impl Shape for ElasticGpuSpecificationResponse {
    const SHAPE_NAME: &'static str = "ElasticGpuSpecificationResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Type", false, self.r#type.as_ref()),
        ]
    }
}

impl fmt::Display for ElasticGpuSpecificationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ElasticInferenceAccelerator.
///
/// Describes an elastic inference accelerator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElasticInferenceAccelerator {
    /// The type of elastic inference accelerator.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The number of elastic inference accelerators to attach to the instance.
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

impl ElasticInferenceAccelerator {
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

    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }
}

impl Shape for ElasticInferenceAccelerator {
    const SHAPE_NAME: &'static str = "ElasticInferenceAccelerator";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Type", true, self.r#type.as_ref()),
            Member::new("Count", false, self.count.as_ref()),
        ]
    }
}

impl fmt::Display for ElasticInferenceAccelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Filter.
///
/// A filter name and value pair used to return a more specific list of results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    /// The name of the filter. Filter names are case-sensitive.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The filter values. Filter values are case-sensitive.
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the `Values` member.
    #[must_use]
    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    /// Sets the `Values` member, replacing any previous value.
    pub fn set_values(&mut self, values: Option<Vec<String>>) {
        self.values = values;
    }

    /// Appends to the `Values` member and returns the updated value.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

impl Shape for Filter {
    const SHAPE_NAME: &'static str = "Filter";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Name", false, self.name.as_ref()),
            Member::new("Values", false, self.values.as_ref()),
        ]
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FleetData.
///
/// Describes an EC2 Fleet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetData {
    /// The progress of the EC2 Fleet.
    #[serde(rename = "ActivityStatus", skip_serializing_if = "Option::is_none")]
    pub activity_status: Option<FleetActivityStatus>,
    /// The creation date and time of the EC2 Fleet.
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(rename = "FleetId", skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// The state of the EC2 Fleet.
    #[serde(rename = "FleetState", skip_serializing_if = "Option::is_none")]
    pub fleet_state: Option<FleetStateCode>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "ExcessCapacityTerminationPolicy", skip_serializing_if = "Option::is_none")]
    pub excess_capacity_termination_policy: Option<FleetExcessCapacityTerminationPolicy>,
    /// The number of units fulfilled by this request compared to the set target capacity.
    #[serde(rename = "FulfilledCapacity", skip_serializing_if = "Option::is_none")]
    pub fulfilled_capacity: Option<f64>,
    /// The number of units fulfilled by this request compared to the set target On-Demand capacity.
    #[serde(rename = "FulfilledOnDemandCapacity", skip_serializing_if = "Option::is_none")]
    pub fulfilled_on_demand_capacity: Option<f64>,
    #[serde(rename = "LaunchTemplateConfigs", skip_serializing_if = "Option::is_none")]
    pub launch_template_configs: Option<Vec<FleetLaunchTemplateConfig>>,
    #[serde(rename = "TargetCapacitySpecification", skip_serializing_if = "Option::is_none")]
    pub target_capacity_specification: Option<TargetCapacitySpecification>,
    #[serde(rename = "TerminateInstancesWithExpiration", skip_serializing_if = "Option::is_none")]
    pub terminate_instances_with_expiration: Option<bool>,
    /// The type of request.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<FleetType>,
    #[serde(rename = "ValidFrom", skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "ReplaceUnhealthyInstances", skip_serializing_if = "Option::is_none")]
    pub replace_unhealthy_instances: Option<bool>,
    #[serde(rename = "SpotOptions", skip_serializing_if = "Option::is_none")]
    pub spot_options: Option<SpotOptions>,
    #[serde(rename = "OnDemandOptions", skip_serializing_if = "Option::is_none")]
    pub on_demand_options: Option<OnDemandOptions>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "Errors", skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<DescribeFleetError>>,
    #[serde(rename = "Instances", skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<DescribeFleetsInstances>>,
}

impl FleetData {
    /// Returns the `ActivityStatus` member.
    #[must_use]
    pub fn activity_status(&self) -> Option<&FleetActivityStatus> {
        self.activity_status.as_ref()
    }

    /// Sets the `ActivityStatus` member, replacing any previous value.
    pub fn set_activity_status(&mut self, activity_status: Option<FleetActivityStatus>) {
        self.activity_status = activity_status;
    }

    /// Sets the `ActivityStatus` member and returns the updated value.
    #[must_use]
    pub fn with_activity_status(mut self, activity_status: impl Into<FleetActivityStatus>) -> Self {
        self.activity_status = Some(activity_status.into());
        self
    }

    /// Returns the `CreateTime` member.
    #[must_use]
    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    /// Sets the `CreateTime` member, replacing any previous value.
    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time;
    }

    /// Sets the `CreateTime` member and returns the updated value.
    #[must_use]
    pub fn with_create_time(mut self, create_time: impl Into<DateTime<Utc>>) -> Self {
        self.create_time = Some(create_time.into());
        self
    }

    /// Returns the `FleetId` member.
    #[must_use]
    pub fn fleet_id(&self) -> Option<&str> {
        self.fleet_id.as_deref()
    }

    /// Sets the `FleetId` member, replacing any previous value.
    pub fn set_fleet_id(&mut self, fleet_id: Option<String>) {
        self.fleet_id = fleet_id;
    }

    /// Sets the `FleetId` member and returns the updated value.
    #[must_use]
    pub fn with_fleet_id(mut self, fleet_id: impl Into<String>) -> Self {
        self.fleet_id = Some(fleet_id.into());
        self
    }

    /// Returns the `FleetState` member.
    #[must_use]
    pub fn fleet_state(&self) -> Option<&FleetStateCode> {
        self.fleet_state.as_ref()
    }

    /// Sets the `FleetState` member, replacing any previous value.
    pub fn set_fleet_state(&mut self, fleet_state: Option<FleetStateCode>) {
        self.fleet_state = fleet_state;
    }

    /// Sets the `FleetState` member and returns the updated value.
    #[must_use]
    pub fn with_fleet_state(mut self, fleet_state: impl Into<FleetStateCode>) -> Self {
        self.fleet_state = Some(fleet_state.into());
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

    /// Returns the `ExcessCapacityTerminationPolicy` member.
    #[must_use]
    pub fn excess_capacity_termination_policy(
        &self,
    ) -> Option<&FleetExcessCapacityTerminationPolicy> {
        self.excess_capacity_termination_policy.as_ref()
    }

    /// Sets the `ExcessCapacityTerminationPolicy` member, replacing any previous value.
    pub fn set_excess_capacity_termination_policy(
        &mut self,
        excess_capacity_termination_policy: Option<FleetExcessCapacityTerminationPolicy>,
    ) {
        self.excess_capacity_termination_policy = excess_capacity_termination_policy;
    }

    /// Sets the `ExcessCapacityTerminationPolicy` member and returns the updated value.
    #[must_use]
    pub fn with_excess_capacity_termination_policy(
        mut self,
        excess_capacity_termination_policy: impl Into<FleetExcessCapacityTerminationPolicy>,
    ) -> Self {
        self.excess_capacity_termination_policy = Some(excess_capacity_termination_policy.into());
        self
    }

    /// Returns the `FulfilledCapacity` member.
    #[must_use]
    pub fn fulfilled_capacity(&self) -> Option<f64> {
        self.fulfilled_capacity
    }

    /// Sets the `FulfilledCapacity` member, replacing any previous value.
    pub fn set_fulfilled_capacity(&mut self, fulfilled_capacity: Option<f64>) {
        self.fulfilled_capacity = fulfilled_capacity;
    }

    /// Sets the `FulfilledCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_fulfilled_capacity(mut self, fulfilled_capacity: impl Into<f64>) -> Self {
        self.fulfilled_capacity = Some(fulfilled_capacity.into());
        self
    }

    /// Returns the `FulfilledOnDemandCapacity` member.
    #[must_use]
    pub fn fulfilled_on_demand_capacity(&self) -> Option<f64> {
        self.fulfilled_on_demand_capacity
    }

    /// Sets the `FulfilledOnDemandCapacity` member, replacing any previous value.
    pub fn set_fulfilled_on_demand_capacity(&mut self, fulfilled_on_demand_capacity: Option<f64>) {
        self.fulfilled_on_demand_capacity = fulfilled_on_demand_capacity;
    }

    /// Sets the `FulfilledOnDemandCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_fulfilled_on_demand_capacity(
        mut self,
        fulfilled_on_demand_capacity: impl Into<f64>,
    ) -> Self {
        self.fulfilled_on_demand_capacity = Some(fulfilled_on_demand_capacity.into());
        self
    }

    /// Returns the `LaunchTemplateConfigs` member.
    #[must_use]
    pub fn launch_template_configs(&self) -> Option<&[FleetLaunchTemplateConfig]> {
        self.launch_template_configs.as_deref()
    }

    /// Sets the `LaunchTemplateConfigs` member, replacing any previous value.
    pub fn set_launch_template_configs(
        &mut self,
        launch_template_configs: Option<Vec<FleetLaunchTemplateConfig>>,
    ) {
        self.launch_template_configs = launch_template_configs;
    }

    /// Appends to the `LaunchTemplateConfigs` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_configs(
        mut self,
        launch_template_configs: impl IntoIterator<Item = impl Into<FleetLaunchTemplateConfig>>,
    ) -> Self {
        self.launch_template_configs
            .get_or_insert_with(Vec::new)
            .extend(launch_template_configs.into_iter().map(Into::into));
        self
    }

    /// Returns the `TargetCapacitySpecification` member.
    #[must_use]
    pub fn target_capacity_specification(&self) -> Option<&TargetCapacitySpecification> {
        self.target_capacity_specification.as_ref()
    }

    /// Sets the `TargetCapacitySpecification` member, replacing any previous value.
    pub fn set_target_capacity_specification(
        &mut self,
        target_capacity_specification: Option<TargetCapacitySpecification>,
    ) {
        self.target_capacity_specification = target_capacity_specification;
    }

    /// Sets the `TargetCapacitySpecification` member and returns the updated value.
    #[must_use]
    pub fn with_target_capacity_specification(
        mut self,
        target_capacity_specification: impl Into<TargetCapacitySpecification>,
    ) -> Self {
        self.target_capacity_specification = Some(target_capacity_specification.into());
        self
    }

    /// Returns the `TerminateInstancesWithExpiration` member.
    #[must_use]
    pub fn terminate_instances_with_expiration(&self) -> Option<bool> {
        self.terminate_instances_with_expiration
    }

    /// Sets the `TerminateInstancesWithExpiration` member, replacing any previous value.
    pub fn set_terminate_instances_with_expiration(
        &mut self,
        terminate_instances_with_expiration: Option<bool>,
    ) {
        self.terminate_instances_with_expiration = terminate_instances_with_expiration;
    }

    /// Sets the `TerminateInstancesWithExpiration` member and returns the updated value.
    #[must_use]
    pub fn with_terminate_instances_with_expiration(
        mut self,
        terminate_instances_with_expiration: impl Into<bool>,
    ) -> Self {
        self.terminate_instances_with_expiration = Some(terminate_instances_with_expiration.into());
        self
    }

    /// Returns the `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&FleetType> {
        self.r#type.as_ref()
    }

    /// Sets the `Type` member, replacing any previous value.
    pub fn set_type(&mut self, r#type: Option<FleetType>) {
        self.r#type = r#type;
    }

    /// Sets the `Type` member and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<FleetType>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Returns the `ValidFrom` member.
    #[must_use]
    pub fn valid_from(&self) -> Option<&DateTime<Utc>> {
        self.valid_from.as_ref()
    }

    /// Sets the `ValidFrom` member, replacing any previous value.
    pub fn set_valid_from(&mut self, valid_from: Option<DateTime<Utc>>) {
        self.valid_from = valid_from;
    }

    /// Sets the `ValidFrom` member and returns the updated value.
    #[must_use]
    pub fn with_valid_from(mut self, valid_from: impl Into<DateTime<Utc>>) -> Self {
        self.valid_from = Some(valid_from.into());
        self
    }

    /// Returns the `ValidUntil` member.
    #[must_use]
    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    /// Sets the `ValidUntil` member, replacing any previous value.
    pub fn set_valid_until(&mut self, valid_until: Option<DateTime<Utc>>) {
        self.valid_until = valid_until;
    }

    /// Sets the `ValidUntil` member and returns the updated value.
    #[must_use]
    pub fn with_valid_until(mut self, valid_until: impl Into<DateTime<Utc>>) -> Self {
        self.valid_until = Some(valid_until.into());
        self
    }

    /// Returns the `ReplaceUnhealthyInstances` member.
    #[must_use]
    pub fn replace_unhealthy_instances(&self) -> Option<bool> {
        self.replace_unhealthy_instances
    }

    /// Sets the `ReplaceUnhealthyInstances` member, replacing any previous value.
    pub fn set_replace_unhealthy_instances(&mut self, replace_unhealthy_instances: Option<bool>) {
        self.replace_unhealthy_instances = replace_unhealthy_instances;
    }

    /// Sets the `ReplaceUnhealthyInstances` member and returns the updated value.
    #[must_use]
    pub fn with_replace_unhealthy_instances(
        mut self,
        replace_unhealthy_instances: impl Into<bool>,
    ) -> Self {
        self.replace_unhealthy_instances = Some(replace_unhealthy_instances.into());
        self
    }

    /// Returns the `SpotOptions` member.
    #[must_use]
    pub fn spot_options(&self) -> Option<&SpotOptions> {
        self.spot_options.as_ref()
    }

    /// Sets the `SpotOptions` member, replacing any previous value.
    pub fn set_spot_options(&mut self, spot_options: Option<SpotOptions>) {
        self.spot_options = spot_options;
    }

    /// Sets the `SpotOptions` member and returns the updated value.
    #[must_use]
    pub fn with_spot_options(mut self, spot_options: impl Into<SpotOptions>) -> Self {
        self.spot_options = Some(spot_options.into());
        self
    }

    /// Returns the `OnDemandOptions` member.
    #[must_use]
    pub fn on_demand_options(&self) -> Option<&OnDemandOptions> {
        self.on_demand_options.as_ref()
    }

    /// Sets the `OnDemandOptions` member, replacing any previous value.
    pub fn set_on_demand_options(&mut self, on_demand_options: Option<OnDemandOptions>) {
        self.on_demand_options = on_demand_options;
    }

    /// Sets the `OnDemandOptions` member and returns the updated value.
    #[must_use]
    pub fn with_on_demand_options(mut self, on_demand_options: impl Into<OnDemandOptions>) -> Self {
        self.on_demand_options = Some(on_demand_options.into());
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

    /// Returns the `Errors` member.
    #[must_use]
    pub fn errors(&self) -> Option<&[DescribeFleetError]> {
        self.errors.as_deref()
    }

    /// Sets the `Errors` member, replacing any previous value.
    pub fn set_errors(&mut self, errors: Option<Vec<DescribeFleetError>>) {
        self.errors = errors;
    }

    /// Appends to the `Errors` member and returns the updated value.
    #[must_use]
    pub fn with_errors(
        mut self,
        errors: impl IntoIterator<Item = impl Into<DescribeFleetError>>,
    ) -> Self {
        self.errors
            .get_or_insert_with(Vec::new)
            .extend(errors.into_iter().map(Into::into));
        self
    }

    /// Returns the `Instances` member.
    #[must_use]
    pub fn instances(&self) -> Option<&[DescribeFleetsInstances]> {
        self.instances.as_deref()
    }

    /// Sets the `Instances` member, replacing any previous value.
    pub fn set_instances(&mut self, instances: Option<Vec<DescribeFleetsInstances>>) {
        self.instances = instances;
    }

    /// Appends to the `Instances` member and returns the updated value.
    #[must_use]
    pub fn with_instances(
        mut self,
        instances: impl IntoIterator<Item = impl Into<DescribeFleetsInstances>>,
    ) -> Self {
        self.instances
            .get_or_insert_with(Vec::new)
            .extend(instances.into_iter().map(Into::into));
        self
    }
}

impl Shape for FleetData {
    const SHAPE_NAME: &'static str = "FleetData";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ActivityStatus", false, self.activity_status.as_ref()),
            Member::new("CreateTime", false, self.create_time.as_ref()),
            Member::new("FleetId", false, self.fleet_id.as_ref()),
            Member::new("FleetState", false, self.fleet_state.as_ref()),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new(
                "ExcessCapacityTerminationPolicy",
                false,
                self.excess_capacity_termination_policy.as_ref(),
            ),
            Member::new("FulfilledCapacity", false, self.fulfilled_capacity.as_ref()),
            Member::new(
                "FulfilledOnDemandCapacity",
                false,
                self.fulfilled_on_demand_capacity.as_ref(),
            ),
            Member::new("LaunchTemplateConfigs", false, self.launch_template_configs.as_ref()),
            Member::new(
                "TargetCapacitySpecification",
                false,
                self.target_capacity_specification.as_ref(),
            ),
            Member::new(
                "TerminateInstancesWithExpiration",
                false,
                self.terminate_instances_with_expiration.as_ref(),
            ),
            Member::new("Type", false, self.r#type.as_ref()),
            Member::new("ValidFrom", false, self.valid_from.as_ref()),
            Member::new("ValidUntil", false, self.valid_until.as_ref()),
            Member::new(
                "ReplaceUnhealthyInstances",
                false,
                self.replace_unhealthy_instances.as_ref(),
            ),
            Member::new("SpotOptions", false, self.spot_options.as_ref()),
            Member::new("OnDemandOptions", false, self.on_demand_options.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("Errors", false, self.errors.as_ref()),
            Member::new("Instances", false, self.instances.as_ref()),
        ]
    }
}

impl PartialEq for FleetData {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for FleetData {}

impl Hash for FleetData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for FleetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FleetLaunchTemplateConfig.
///
/// Describes a launch template and overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FleetLaunchTemplateConfig {
    #[serde(rename = "LaunchTemplateSpecification", skip_serializing_if = "Option::is_none")]
    pub launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    #[serde(rename = "Overrides", skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<FleetLaunchTemplateOverrides>>,
}

impl FleetLaunchTemplateConfig {
    /// Returns the `LaunchTemplateSpecification` member.
    #[must_use]
    pub fn launch_template_specification(&self) -> Option<&FleetLaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    /// Sets the `LaunchTemplateSpecification` member, replacing any previous value.
    pub fn set_launch_template_specification(
        &mut self,
        launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    ) {
        self.launch_template_specification = launch_template_specification;
    }

    /// Sets the `LaunchTemplateSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_specification(
        mut self,
        launch_template_specification: impl Into<FleetLaunchTemplateSpecification>,
    ) -> Self {
        self.launch_template_specification = Some(launch_template_specification.into());
        self
    }

    /// Returns the `Overrides` member.
    #[must_use]
    pub fn overrides(&self) -> Option<&[FleetLaunchTemplateOverrides]> {
        self.overrides.as_deref()
    }

    /// Sets the `Overrides` member, replacing any previous value.
    pub fn set_overrides(&mut self, overrides: Option<Vec<FleetLaunchTemplateOverrides>>) {
        self.overrides = overrides;
    }

    /// Appends to the `Overrides` member and returns the updated value.
    #[must_use]
    pub fn with_overrides(
        mut self,
        overrides: impl IntoIterator<Item = impl Into<FleetLaunchTemplateOverrides>>,
    ) -> Self {
        self.overrides
            .get_or_insert_with(Vec::new)
            .extend(overrides.into_iter().map(Into::into));
        self
    }
}

impl Shape for FleetLaunchTemplateConfig {
    const SHAPE_NAME: &'static str = "FleetLaunchTemplateConfig";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "LaunchTemplateSpecification",
                false,
                self.launch_template_specification.as_ref(),
            ),
            Member::new("Overrides", false, self.overrides.as_ref()),
        ]
    }
}

impl fmt::Display for FleetLaunchTemplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FleetLaunchTemplateOverrides.
///
/// Describes overrides for a launch template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetLaunchTemplateOverrides {
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "MaxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "WeightedCapacity", skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<f64>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementResponse>,
}

impl FleetLaunchTemplateOverrides {
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

    /// Returns the `MaxPrice` member.
    #[must_use]
    pub fn max_price(&self) -> Option<&str> {
        self.max_price.as_deref()
    }

    /// Sets the `MaxPrice` member, replacing any previous value.
    pub fn set_max_price(&mut self, max_price: Option<String>) {
        self.max_price = max_price;
    }

    /// Sets the `MaxPrice` member and returns the updated value.
    #[must_use]
    pub fn with_max_price(mut self, max_price: impl Into<String>) -> Self {
        self.max_price = Some(max_price.into());
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

    /// Returns the `WeightedCapacity` member.
    #[must_use]
    pub fn weighted_capacity(&self) -> Option<f64> {
        self.weighted_capacity
    }

    /// Sets the `WeightedCapacity` member, replacing any previous value.
    pub fn set_weighted_capacity(&mut self, weighted_capacity: Option<f64>) {
        self.weighted_capacity = weighted_capacity;
    }

    /// Sets the `WeightedCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_weighted_capacity(mut self, weighted_capacity: impl Into<f64>) -> Self {
        self.weighted_capacity = Some(weighted_capacity.into());
        self
    }

    /// Returns the `Priority` member.
    #[must_use]
    pub fn priority(&self) -> Option<f64> {
        self.priority
    }

    /// Sets the `Priority` member, replacing any previous value.
    pub fn set_priority(&mut self, priority: Option<f64>) {
        self.priority = priority;
    }

    /// Sets the `Priority` member and returns the updated value.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<f64>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Returns the `Placement` member.
    #[must_use]
    pub fn placement(&self) -> Option<&PlacementResponse> {
        self.placement.as_ref()
    }

    /// Sets the `Placement` member, replacing any previous value.
    pub fn set_placement(&mut self, placement: Option<PlacementResponse>) {
        self.placement = placement;
    }

    /// Sets the `Placement` member and returns the updated value.
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<PlacementResponse>) -> Self {
        self.placement = Some(placement.into());
        self
    }
}

impl Shape for FleetLaunchTemplateOverrides {
    const SHAPE_NAME: &'static str = "FleetLaunchTemplateOverrides";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("MaxPrice", false, self.max_price.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("WeightedCapacity", false, self.weighted_capacity.as_ref()),
            Member::new("Priority", false, self.priority.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
        ]
    }
}

impl PartialEq for FleetLaunchTemplateOverrides {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for FleetLaunchTemplateOverrides {}

impl Hash for FleetLaunchTemplateOverrides {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for FleetLaunchTemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FleetLaunchTemplateSpecification.
///
/// Describes the Amazon EC2 launch template and the launch template version that can be used by a fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FleetLaunchTemplateSpecification {
    #[serde(rename = "LaunchTemplateId", skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<String>,
    #[serde(rename = "LaunchTemplateName", skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl FleetLaunchTemplateSpecification {
    /// Returns the `LaunchTemplateId` member.
    #[must_use]
    pub fn launch_template_id(&self) -> Option<&str> {
        self.launch_template_id.as_deref()
    }

    /// Sets the `LaunchTemplateId` member, replacing any previous value.
    pub fn set_launch_template_id(&mut self, launch_template_id: Option<String>) {
        self.launch_template_id = launch_template_id;
    }

    /// Sets the `LaunchTemplateId` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_id(mut self, launch_template_id: impl Into<String>) -> Self {
        self.launch_template_id = Some(launch_template_id.into());
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

    /// Returns the `Version` member.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sets the `Version` member, replacing any previous value.
    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    /// Sets the `Version` member and returns the updated value.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl Shape for FleetLaunchTemplateSpecification {
    const SHAPE_NAME: &'static str = "FleetLaunchTemplateSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LaunchTemplateId", false, self.launch_template_id.as_ref()),
            Member::new("LaunchTemplateName", false, self.launch_template_name.as_ref()),
            Member::new("Version", false, self.version.as_ref()),
        ]
    }
}

impl fmt::Display for FleetLaunchTemplateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FpgaDeviceInfo.
///
/// Describes the FPGA accelerator for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FpgaDeviceInfo {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Manufacturer", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "MemoryInfo", skip_serializing_if = "Option::is_none")]
    pub memory_info: Option<FpgaDeviceMemoryInfo>,
}

impl FpgaDeviceInfo {
    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the `Manufacturer` member.
    #[must_use]
    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Sets the `Manufacturer` member, replacing any previous value.
    pub fn set_manufacturer(&mut self, manufacturer: Option<String>) {
        self.manufacturer = manufacturer;
    }

    /// Sets the `Manufacturer` member and returns the updated value.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Returns the `MemoryInfo` member.
    #[must_use]
    pub fn memory_info(&self) -> Option<&FpgaDeviceMemoryInfo> {
        self.memory_info.as_ref()
    }

    /// Sets the `MemoryInfo` member, replacing any previous value.
    pub fn set_memory_info(&mut self, memory_info: Option<FpgaDeviceMemoryInfo>) {
        self.memory_info = memory_info;
    }

    /// Sets the `MemoryInfo` member and returns the updated value.
    #[must_use]
    pub fn with_memory_info(mut self, memory_info: impl Into<FpgaDeviceMemoryInfo>) -> Self {
        self.memory_info = Some(memory_info.into());
        self
    }
}

impl Shape for FpgaDeviceInfo {
    const SHAPE_NAME: &'static str = "FpgaDeviceInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Name", false, self.name.as_ref()),
            Member::new("Manufacturer", false, self.manufacturer.as_ref()),
            Member::new("Count", false, self.count.as_ref()),
            Member::new("MemoryInfo", false, self.memory_info.as_ref()),
        ]
    }
}

impl fmt::Display for FpgaDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FpgaDeviceMemoryInfo.
///
/// Describes the memory for the FPGA accelerator for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FpgaDeviceMemoryInfo {
    #[serde(rename = "SizeInMiB", skip_serializing_if = "Option::is_none")]
    pub size_in_mi_b: Option<i32>,
}

impl FpgaDeviceMemoryInfo {
    /// Returns the `SizeInMiB` member.
    #[must_use]
    pub fn size_in_mi_b(&self) -> Option<i32> {
        self.size_in_mi_b
    }

    /// Sets the `SizeInMiB` member, replacing any previous value.
    pub fn set_size_in_mi_b(&mut self, size_in_mi_b: Option<i32>) {
        self.size_in_mi_b = size_in_mi_b;
    }

    /// Sets the `SizeInMiB` member and returns the updated value.
    #[must_use]
    pub fn with_size_in_mi_b(mut self, size_in_mi_b: impl Into<i32>) -> Self {
        self.size_in_mi_b = Some(size_in_mi_b.into());
        self
    }
}

impl Shape for FpgaDeviceMemoryInfo {
    const SHAPE_NAME: &'static str = "FpgaDeviceMemoryInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SizeInMiB", false, self.size_in_mi_b.as_ref()),
        ]
    }
}

impl fmt::Display for FpgaDeviceMemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FpgaImage.
///
/// Describes an Amazon FPGA image (AFI).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FpgaImage {
    /// The FPGA image identifier (AFI ID).
    #[serde(rename = "FpgaImageId", skip_serializing_if = "Option::is_none")]
    pub fpga_image_id: Option<String>,
    /// The global FPGA image identifier (AGFI ID).
    #[serde(rename = "FpgaImageGlobalId", skip_serializing_if = "Option::is_none")]
    pub fpga_image_global_id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "ShellVersion", skip_serializing_if = "Option::is_none")]
    pub shell_version: Option<String>,
    #[serde(rename = "PciId", skip_serializing_if = "Option::is_none")]
    pub pci_id: Option<PciId>,
    /// Information about the state of the AFI.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<FpgaImageState>,
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(rename = "UpdateTime", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "OwnerAlias", skip_serializing_if = "Option::is_none")]
    pub owner_alias: Option<String>,
    #[serde(rename = "ProductCodes", skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<ProductCode>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "Public", skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(rename = "DataRetentionSupport", skip_serializing_if = "Option::is_none")]
    pub data_retention_support: Option<bool>,
}

impl FpgaImage {
    /// Returns the `FpgaImageId` member.
    #[must_use]
    pub fn fpga_image_id(&self) -> Option<&str> {
        self.fpga_image_id.as_deref()
    }

    /// Sets the `FpgaImageId` member, replacing any previous value.
    pub fn set_fpga_image_id(&mut self, fpga_image_id: Option<String>) {
        self.fpga_image_id = fpga_image_id;
    }

    /// Sets the `FpgaImageId` member and returns the updated value.
    #[must_use]
    pub fn with_fpga_image_id(mut self, fpga_image_id: impl Into<String>) -> Self {
        self.fpga_image_id = Some(fpga_image_id.into());
        self
    }

    /// Returns the `FpgaImageGlobalId` member.
    #[must_use]
    pub fn fpga_image_global_id(&self) -> Option<&str> {
        self.fpga_image_global_id.as_deref()
    }

    /// Sets the `FpgaImageGlobalId` member, replacing any previous value.
    pub fn set_fpga_image_global_id(&mut self, fpga_image_global_id: Option<String>) {
        self.fpga_image_global_id = fpga_image_global_id;
    }

    /// Sets the `FpgaImageGlobalId` member and returns the updated value.
    #[must_use]
    pub fn with_fpga_image_global_id(mut self, fpga_image_global_id: impl Into<String>) -> Self {
        self.fpga_image_global_id = Some(fpga_image_global_id.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    /// Returns the `ShellVersion` member.
    #[must_use]
    pub fn shell_version(&self) -> Option<&str> {
        self.shell_version.as_deref()
    }

    /// Sets the `ShellVersion` member, replacing any previous value.
    pub fn set_shell_version(&mut self, shell_version: Option<String>) {
        self.shell_version = shell_version;
    }

    /// Sets the `ShellVersion` member and returns the updated value.
    #[must_use]
    pub fn with_shell_version(mut self, shell_version: impl Into<String>) -> Self {
        self.shell_version = Some(shell_version.into());
        self
    }

    /// Returns the `PciId` member.
    #[must_use]
    pub fn pci_id(&self) -> Option<&PciId> {
        self.pci_id.as_ref()
    }

    /// Sets the `PciId` member, replacing any previous value.
    pub fn set_pci_id(&mut self, pci_id: Option<PciId>) {
        self.pci_id = pci_id;
    }

    /// Sets the `PciId` member and returns the updated value.
    #[must_use]
    pub fn with_pci_id(mut self, pci_id: impl Into<PciId>) -> Self {
        self.pci_id = Some(pci_id.into());
        self
    }

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&FpgaImageState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<FpgaImageState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<FpgaImageState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `CreateTime` member.
    #[must_use]
    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    /// Sets the `CreateTime` member, replacing any previous value.
    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time;
    }

    /// Sets the `CreateTime` member and returns the updated value.
    #[must_use]
    pub fn with_create_time(mut self, create_time: impl Into<DateTime<Utc>>) -> Self {
        self.create_time = Some(create_time.into());
        self
    }

    /// Returns the `UpdateTime` member.
    #[must_use]
    pub fn update_time(&self) -> Option<&DateTime<Utc>> {
        self.update_time.as_ref()
    }

    /// Sets the `UpdateTime` member, replacing any previous value.
    pub fn set_update_time(&mut self, update_time: Option<DateTime<Utc>>) {
        self.update_time = update_time;
    }

    /// Sets the `UpdateTime` member and returns the updated value.
    #[must_use]
    pub fn with_update_time(mut self, update_time: impl Into<DateTime<Utc>>) -> Self {
        self.update_time = Some(update_time.into());
        self
    }

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `OwnerAlias` member.
    #[must_use]
    pub fn owner_alias(&self) -> Option<&str> {
        self.owner_alias.as_deref()
    }

    /// Sets the `OwnerAlias` member, replacing any previous value.
    pub fn set_owner_alias(&mut self, owner_alias: Option<String>) {
        self.owner_alias = owner_alias;
    }

    /// Sets the `OwnerAlias` member and returns the updated value.
    #[must_use]
    pub fn with_owner_alias(mut self, owner_alias: impl Into<String>) -> Self {
        self.owner_alias = Some(owner_alias.into());
        self
    }

    /// Returns the `ProductCodes` member.
    #[must_use]
    pub fn product_codes(&self) -> Option<&[ProductCode]> {
        self.product_codes.as_deref()
    }

    /// Sets the `ProductCodes` member, replacing any previous value.
    pub fn set_product_codes(&mut self, product_codes: Option<Vec<ProductCode>>) {
        self.product_codes = product_codes;
    }

    /// Appends to the `ProductCodes` member and returns the updated value.
    #[must_use]
    pub fn with_product_codes(
        mut self,
        product_codes: impl IntoIterator<Item = impl Into<ProductCode>>,
    ) -> Self {
        self.product_codes
            .get_or_insert_with(Vec::new)
            .extend(product_codes.into_iter().map(Into::into));
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

    /// Returns the `Public` member.
    #[must_use]
    pub fn public(&self) -> Option<bool> {
        self.public
    }

    /// Sets the `Public` member, replacing any previous value.
    pub fn set_public(&mut self, public: Option<bool>) {
        self.public = public;
    }

    /// Sets the `Public` member and returns the updated value.
    #[must_use]
    pub fn with_public(mut self, public: impl Into<bool>) -> Self {
        self.public = Some(public.into());
        self
    }

    /// Returns the `DataRetentionSupport` member.
    #[must_use]
    pub fn data_retention_support(&self) -> Option<bool> {
        self.data_retention_support
    }

    /// Sets the `DataRetentionSupport` member, replacing any previous value.
    pub fn set_data_retention_support(&mut self, data_retention_support: Option<bool>) {
        self.data_retention_support = data_retention_support;
    }

    /// Sets the `DataRetentionSupport` member and returns the updated value.
    #[must_use]
    pub fn with_data_retention_support(mut self, data_retention_support: impl Into<bool>) -> Self {
        self.data_retention_support = Some(data_retention_support.into());
        self
    }
}

impl Shape for FpgaImage {
    const SHAPE_NAME: &'static str = "FpgaImage";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("FpgaImageId", false, self.fpga_image_id.as_ref()),
            Member::new("FpgaImageGlobalId", false, self.fpga_image_global_id.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("ShellVersion", false, self.shell_version.as_ref()),
            Member::new("PciId", false, self.pci_id.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("CreateTime", false, self.create_time.as_ref()),
            Member::new("UpdateTime", false, self.update_time.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("OwnerAlias", false, self.owner_alias.as_ref()),
            Member::new("ProductCodes", false, self.product_codes.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("Public", false, self.public.as_ref()),
            Member::new("DataRetentionSupport", false, self.data_retention_support.as_ref()),
        ]
    }
}

impl fmt::Display for FpgaImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FpgaImageState.
///
/// Describes the state of the bitstream generation process for an AFI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FpgaImageState {
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<FpgaImageStateCode>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FpgaImageState {
    /// Returns the `Code` member.
    #[must_use]
    pub fn code(&self) -> Option<&FpgaImageStateCode> {
        self.code.as_ref()
    }

    /// Sets the `Code` member, replacing any previous value.
    pub fn set_code(&mut self, code: Option<FpgaImageStateCode>) {
        self.code = code;
    }

    /// Sets the `Code` member and returns the updated value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<FpgaImageStateCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the `Message` member.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Sets the `Message` member, replacing any previous value.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Sets the `Message` member and returns the updated value.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Shape for FpgaImageState {
    const SHAPE_NAME: &'static str = "FpgaImageState";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Code", false, self.code.as_ref()),
            Member::new("Message", false, self.message.as_ref()),
        ]
    }
}

impl fmt::Display for FpgaImageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 FpgaInfo.
///
/// Describes the FPGAs for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FpgaInfo {
    #[serde(rename = "Fpgas", skip_serializing_if = "Option::is_none")]
    pub fpgas: Option<Vec<FpgaDeviceInfo>>,
    #[serde(rename = "TotalFpgaMemoryInMiB", skip_serializing_if = "Option::is_none")]
    pub total_fpga_memory_in_mi_b: Option<i32>,
}

impl FpgaInfo {
    /// Returns the `Fpgas` member.
    #[must_use]
    pub fn fpgas(&self) -> Option<&[FpgaDeviceInfo]> {
        self.fpgas.as_deref()
    }

    /// Sets the `Fpgas` member, replacing any previous value.
    pub fn set_fpgas(&mut self, fpgas: Option<Vec<FpgaDeviceInfo>>) {
        self.fpgas = fpgas;
    }

    /// Appends to the `Fpgas` member and returns the updated value.
    #[must_use]
    pub fn with_fpgas(
        mut self,
        fpgas: impl IntoIterator<Item = impl Into<FpgaDeviceInfo>>,
    ) -> Self {
        self.fpgas
            .get_or_insert_with(Vec::new)
            .extend(fpgas.into_iter().map(Into::into));
        self
    }

    /// Returns the `TotalFpgaMemoryInMiB` member.
    #[must_use]
    pub fn total_fpga_memory_in_mi_b(&self) -> Option<i32> {
        self.total_fpga_memory_in_mi_b
    }

    /// Sets the `TotalFpgaMemoryInMiB` member, replacing any previous value.
    pub fn set_total_fpga_memory_in_mi_b(&mut self, total_fpga_memory_in_mi_b: Option<i32>) {
        self.total_fpga_memory_in_mi_b = total_fpga_memory_in_mi_b;
    }

    /// Sets the `TotalFpgaMemoryInMiB` member and returns the updated value.
    #[must_use]
    pub fn with_total_fpga_memory_in_mi_b(
        mut self,
        total_fpga_memory_in_mi_b: impl Into<i32>,
    ) -> Self {
        self.total_fpga_memory_in_mi_b = Some(total_fpga_memory_in_mi_b.into());
        self
    }
}

impl Shape for FpgaInfo {
    const SHAPE_NAME: &'static str = "FpgaInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Fpgas", false, self.fpgas.as_ref()),
            Member::new("TotalFpgaMemoryInMiB", false, self.total_fpga_memory_in_mi_b.as_ref()),
        ]
    }
}

impl fmt::Display for FpgaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 GpuDeviceInfo.
///
/// Describes the GPU accelerators for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GpuDeviceInfo {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Manufacturer", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "MemoryInfo", skip_serializing_if = "Option::is_none")]
    pub memory_info: Option<GpuDeviceMemoryInfo>,
}

impl GpuDeviceInfo {
    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the `Manufacturer` member.
    #[must_use]
    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Sets the `Manufacturer` member, replacing any previous value.
    pub fn set_manufacturer(&mut self, manufacturer: Option<String>) {
        self.manufacturer = manufacturer;
    }

    /// Sets the `Manufacturer` member and returns the updated value.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Returns the `MemoryInfo` member.
    #[must_use]
    pub fn memory_info(&self) -> Option<&GpuDeviceMemoryInfo> {
        self.memory_info.as_ref()
    }

    /// Sets the `MemoryInfo` member, replacing any previous value.
    pub fn set_memory_info(&mut self, memory_info: Option<GpuDeviceMemoryInfo>) {
        self.memory_info = memory_info;
    }

    /// Sets the `MemoryInfo` member and returns the updated value.
    #[must_use]
    pub fn with_memory_info(mut self, memory_info: impl Into<GpuDeviceMemoryInfo>) -> Self {
        self.memory_info = Some(memory_info.into());
        self
    }
}

impl Shape for GpuDeviceInfo {
    const SHAPE_NAME: &'static str = "GpuDeviceInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Name", false, self.name.as_ref()),
            Member::new("Manufacturer", false, self.manufacturer.as_ref()),
            Member::new("Count", false, self.count.as_ref()),
            Member::new("MemoryInfo", false, self.memory_info.as_ref()),
        ]
    }
}

impl fmt::Display for GpuDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 GpuDeviceMemoryInfo.
///
/// Describes the memory available to the GPU accelerator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GpuDeviceMemoryInfo {
    #[serde(rename = "SizeInMiB", skip_serializing_if = "Option::is_none")]
    pub size_in_mi_b: Option<i32>,
}

impl GpuDeviceMemoryInfo {
    /// Returns the `SizeInMiB` member.
    #[must_use]
    pub fn size_in_mi_b(&self) -> Option<i32> {
        self.size_in_mi_b
    }

    /// Sets the `SizeInMiB` member, replacing any previous value.
    pub fn set_size_in_mi_b(&mut self, size_in_mi_b: Option<i32>) {
        self.size_in_mi_b = size_in_mi_b;
    }

    /// Sets the `SizeInMiB` member and returns the updated value.
    #[must_use]
    pub fn with_size_in_mi_b(mut self, size_in_mi_b: impl Into<i32>) -> Self {
        self.size_in_mi_b = Some(size_in_mi_b.into());
        self
    }
}

impl Shape for GpuDeviceMemoryInfo {
    const SHAPE_NAME: &'static str = "GpuDeviceMemoryInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SizeInMiB", false, self.size_in_mi_b.as_ref()),
        ]
    }
}

impl fmt::Display for GpuDeviceMemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 GpuInfo.
///
/// Describes the GPU accelerators for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GpuInfo {
    #[serde(rename = "Gpus", skip_serializing_if = "Option::is_none")]
    pub gpus: Option<Vec<GpuDeviceInfo>>,
    #[serde(rename = "TotalGpuMemoryInMiB", skip_serializing_if = "Option::is_none")]
    pub total_gpu_memory_in_mi_b: Option<i32>,
}

impl GpuInfo {
    /// Returns the `Gpus` member.
    #[must_use]
    pub fn gpus(&self) -> Option<&[GpuDeviceInfo]> {
        self.gpus.as_deref()
    }

    /// Sets the `Gpus` member, replacing any previous value.
    pub fn set_gpus(&mut self, gpus: Option<Vec<GpuDeviceInfo>>) {
        self.gpus = gpus;
    }

    /// Appends to the `Gpus` member and returns the updated value.
    #[must_use]
    pub fn with_gpus(mut self, gpus: impl IntoIterator<Item = impl Into<GpuDeviceInfo>>) -> Self {
        self.gpus
            .get_or_insert_with(Vec::new)
            .extend(gpus.into_iter().map(Into::into));
        self
    }

    /// Returns the `TotalGpuMemoryInMiB` member.
    #[must_use]
    pub fn total_gpu_memory_in_mi_b(&self) -> Option<i32> {
        self.total_gpu_memory_in_mi_b
    }

    /// Sets the `TotalGpuMemoryInMiB` member, replacing any previous value.
    pub fn set_total_gpu_memory_in_mi_b(&mut self, total_gpu_memory_in_mi_b: Option<i32>) {
        self.total_gpu_memory_in_mi_b = total_gpu_memory_in_mi_b;
    }

    /// Sets the `TotalGpuMemoryInMiB` member and returns the updated value.
    #[must_use]
    pub fn with_total_gpu_memory_in_mi_b(
        mut self,
        total_gpu_memory_in_mi_b: impl Into<i32>,
    ) -> Self {
        self.total_gpu_memory_in_mi_b = Some(total_gpu_memory_in_mi_b.into());
        self
    }
}

impl Shape for GpuInfo {
    const SHAPE_NAME: &'static str = "GpuInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Gpus", false, self.gpus.as_ref()),
            Member::new("TotalGpuMemoryInMiB", false, self.total_gpu_memory_in_mi_b.as_ref()),
        ]
    }
}

impl fmt::Display for GpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 GroupIdentifier.
///
/// Describes a security group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupIdentifier {
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl GroupIdentifier {
    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `GroupId` member.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Sets the `GroupId` member, replacing any previous value.
    pub fn set_group_id(&mut self, group_id: Option<String>) {
        self.group_id = group_id;
    }

    /// Sets the `GroupId` member and returns the updated value.
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

impl Shape for GroupIdentifier {
    const SHAPE_NAME: &'static str = "GroupIdentifier";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("GroupId", false, self.group_id.as_ref()),
        ]
    }
}

impl fmt::Display for GroupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 HibernationOptions.
///
/// Indicates whether your instance is configured for hibernation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HibernationOptions {
    /// If this parameter is set to `true`, your instance is enabled for hibernation.
    #[serde(rename = "Configured", skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

impl HibernationOptions {
    /// Returns the `Configured` member.
    #[must_use]
    pub fn configured(&self) -> Option<bool> {
        self.configured
    }

    /// Sets the `Configured` member, replacing any previous value.
    pub fn set_configured(&mut self, configured: Option<bool>) {
        self.configured = configured;
    }

    /// Sets the `Configured` member and returns the updated value.
    #[must_use]
    pub fn with_configured(mut self, configured: impl Into<bool>) -> Self {
        self.configured = Some(configured.into());
        self
    }
}

impl Shape for HibernationOptions {
    const SHAPE_NAME: &'static str = "HibernationOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Configured", false, self.configured.as_ref()),
        ]
    }
}

impl fmt::Display for HibernationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 HibernationOptionsRequest.
///
/// Indicates whether the instance is configured for hibernation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HibernationOptionsRequest {
    #[serde(rename = "Configured", skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

impl HibernationOptionsRequest {
    /// Returns the `Configured` member.
    #[must_use]
    pub fn configured(&self) -> Option<bool> {
        self.configured
    }

    /// Sets the `Configured` member, replacing any previous value.
    pub fn set_configured(&mut self, configured: Option<bool>) {
        self.configured = configured;
    }

    /// Sets the `Configured` member and returns the updated value.
    #[must_use]
    pub fn with_configured(mut self, configured: impl Into<bool>) -> Self {
        self.configured = Some(configured.into());
        self
    }
}

impl Shape for HibernationOptionsRequest {
    const SHAPE_NAME: &'static str = "HibernationOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Configured", false, self.configured.as_ref()),
        ]
    }
}

impl fmt::Display for HibernationOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 IKEVersionsListValue.
///
/// The internet key exchange (IKE) version permitted for the VPN tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IKEVersionsListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl IKEVersionsListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for IKEVersionsListValue {
    const SHAPE_NAME: &'static str = "IKEVersionsListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for IKEVersionsListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 IKEVersionsRequestListValue.
///
/// The IKE version that is permitted for the VPN tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IKEVersionsRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl IKEVersionsRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for IKEVersionsRequestListValue {
    const SHAPE_NAME: &'static str = "IKEVersionsRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for IKEVersionsRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 IamInstanceProfile.
///
/// Describes an IAM instance profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IamInstanceProfile {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl IamInstanceProfile {
    /// Returns the `Arn` member.
    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    /// Sets the `Arn` member, replacing any previous value.
    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    /// Sets the `Arn` member and returns the updated value.
    #[must_use]
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Returns the `Id` member.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the `Id` member, replacing any previous value.
    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Sets the `Id` member and returns the updated value.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Shape for IamInstanceProfile {
    const SHAPE_NAME: &'static str = "IamInstanceProfile";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Arn", false, self.arn.as_ref()),
            Member::new("Id", false, self.id.as_ref()),
        ]
    }
}

impl fmt::Display for IamInstanceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 IamInstanceProfileSpecification.
///
/// Describes an IAM instance profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IamInstanceProfileSpecification {
    /// The Amazon Resource Name (ARN) of the instance profile.
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// The name of the instance profile.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl IamInstanceProfileSpecification {
    /// Returns the `Arn` member.
    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    /// Sets the `Arn` member, replacing any previous value.
    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    /// Sets the `Arn` member and returns the updated value.
    #[must_use]
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Shape for IamInstanceProfileSpecification {
    const SHAPE_NAME: &'static str = "IamInstanceProfileSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Arn", false, self.arn.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
        ]
    }
}

impl fmt::Display for IamInstanceProfileSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Image.
///
/// Describes an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "Architecture", skip_serializing_if = "Option::is_none")]
    pub architecture: Option<ArchitectureValues>,
    /// The date and time the image was created.
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "ImageLocation", skip_serializing_if = "Option::is_none")]
    pub image_location: Option<String>,
    #[serde(rename = "ImageType", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<ImageTypeValues>,
    /// Indicates whether the image has public launch permissions.
    #[serde(rename = "Public", skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformValues>,
    #[serde(rename = "PlatformDetails", skip_serializing_if = "Option::is_none")]
    pub platform_details: Option<String>,
    #[serde(rename = "UsageOperation", skip_serializing_if = "Option::is_none")]
    pub usage_operation: Option<String>,
    #[serde(rename = "ProductCodes", skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<ProductCode>>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    /// The current state of the AMI.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<ImageState>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "EnaSupport", skip_serializing_if = "Option::is_none")]
    pub ena_support: Option<bool>,
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<HypervisorType>,
    #[serde(rename = "ImageOwnerAlias", skip_serializing_if = "Option::is_none")]
    pub image_owner_alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "RootDeviceName", skip_serializing_if = "Option::is_none")]
    pub root_device_name: Option<String>,
    #[serde(rename = "RootDeviceType", skip_serializing_if = "Option::is_none")]
    pub root_device_type: Option<DeviceType>,
    #[serde(rename = "SriovNetSupport", skip_serializing_if = "Option::is_none")]
    pub sriov_net_support: Option<String>,
    #[serde(rename = "StateReason", skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "VirtualizationType", skip_serializing_if = "Option::is_none")]
    pub virtualization_type: Option<VirtualizationType>,
}

impl Image {
    /// Returns the `Architecture` member.
    #[must_use]
    pub fn architecture(&self) -> Option<&ArchitectureValues> {
        self.architecture.as_ref()
    }

    /// Sets the `Architecture` member, replacing any previous value.
    pub fn set_architecture(&mut self, architecture: Option<ArchitectureValues>) {
        self.architecture = architecture;
    }

    /// Sets the `Architecture` member and returns the updated value.
    #[must_use]
    pub fn with_architecture(mut self, architecture: impl Into<ArchitectureValues>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// Returns the `CreationDate` member.
    #[must_use]
    pub fn creation_date(&self) -> Option<&str> {
        self.creation_date.as_deref()
    }

    /// Sets the `CreationDate` member, replacing any previous value.
    pub fn set_creation_date(&mut self, creation_date: Option<String>) {
        self.creation_date = creation_date;
    }

    /// Sets the `CreationDate` member and returns the updated value.
    #[must_use]
    pub fn with_creation_date(mut self, creation_date: impl Into<String>) -> Self {
        self.creation_date = Some(creation_date.into());
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

    /// Returns the `ImageLocation` member.
    #[must_use]
    pub fn image_location(&self) -> Option<&str> {
        self.image_location.as_deref()
    }

    /// Sets the `ImageLocation` member, replacing any previous value.
    pub fn set_image_location(&mut self, image_location: Option<String>) {
        self.image_location = image_location;
    }

    /// Sets the `ImageLocation` member and returns the updated value.
    #[must_use]
    pub fn with_image_location(mut self, image_location: impl Into<String>) -> Self {
        self.image_location = Some(image_location.into());
        self
    }

    /// Returns the `ImageType` member.
    #[must_use]
    pub fn image_type(&self) -> Option<&ImageTypeValues> {
        self.image_type.as_ref()
    }

    /// Sets the `ImageType` member, replacing any previous value.
    pub fn set_image_type(&mut self, image_type: Option<ImageTypeValues>) {
        self.image_type = image_type;
    }

    /// Sets the `ImageType` member and returns the updated value.
    #[must_use]
    pub fn with_image_type(mut self, image_type: impl Into<ImageTypeValues>) -> Self {
        self.image_type = Some(image_type.into());
        self
    }

    /// Returns the `Public` member.
    #[must_use]
    pub fn public(&self) -> Option<bool> {
        self.public
    }

    /// Sets the `Public` member, replacing any previous value.
    pub fn set_public(&mut self, public: Option<bool>) {
        self.public = public;
    }

    /// Sets the `Public` member and returns the updated value.
    #[must_use]
    pub fn with_public(mut self, public: impl Into<bool>) -> Self {
        self.public = Some(public.into());
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

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `Platform` member.
    #[must_use]
    pub fn platform(&self) -> Option<&PlatformValues> {
        self.platform.as_ref()
    }

    /// Sets the `Platform` member, replacing any previous value.
    pub fn set_platform(&mut self, platform: Option<PlatformValues>) {
        self.platform = platform;
    }

    /// Sets the `Platform` member and returns the updated value.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<PlatformValues>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Returns the `PlatformDetails` member.
    #[must_use]
    pub fn platform_details(&self) -> Option<&str> {
        self.platform_details.as_deref()
    }

    /// Sets the `PlatformDetails` member, replacing any previous value.
    pub fn set_platform_details(&mut self, platform_details: Option<String>) {
        self.platform_details = platform_details;
    }

    /// Sets the `PlatformDetails` member and returns the updated value.
    #[must_use]
    pub fn with_platform_details(mut self, platform_details: impl Into<String>) -> Self {
        self.platform_details = Some(platform_details.into());
        self
    }

    /// Returns the `UsageOperation` member.
    #[must_use]
    pub fn usage_operation(&self) -> Option<&str> {
        self.usage_operation.as_deref()
    }

    /// Sets the `UsageOperation` member, replacing any previous value.
    pub fn set_usage_operation(&mut self, usage_operation: Option<String>) {
        self.usage_operation = usage_operation;
    }

    /// Sets the `UsageOperation` member and returns the updated value.
    #[must_use]
    pub fn with_usage_operation(mut self, usage_operation: impl Into<String>) -> Self {
        self.usage_operation = Some(usage_operation.into());
        self
    }

    /// Returns the `ProductCodes` member.
    #[must_use]
    pub fn product_codes(&self) -> Option<&[ProductCode]> {
        self.product_codes.as_deref()
    }

    /// Sets the `ProductCodes` member, replacing any previous value.
    pub fn set_product_codes(&mut self, product_codes: Option<Vec<ProductCode>>) {
        self.product_codes = product_codes;
    }

    /// Appends to the `ProductCodes` member and returns the updated value.
    #[must_use]
    pub fn with_product_codes(
        mut self,
        product_codes: impl IntoIterator<Item = impl Into<ProductCode>>,
    ) -> Self {
        self.product_codes
            .get_or_insert_with(Vec::new)
            .extend(product_codes.into_iter().map(Into::into));
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

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&ImageState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<ImageState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<ImageState>) -> Self {
        self.state = Some(state.into());
        self
    }

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

    /// Returns the `EnaSupport` member.
    #[must_use]
    pub fn ena_support(&self) -> Option<bool> {
        self.ena_support
    }

    /// Sets the `EnaSupport` member, replacing any previous value.
    pub fn set_ena_support(&mut self, ena_support: Option<bool>) {
        self.ena_support = ena_support;
    }

    /// Sets the `EnaSupport` member and returns the updated value.
    #[must_use]
    pub fn with_ena_support(mut self, ena_support: impl Into<bool>) -> Self {
        self.ena_support = Some(ena_support.into());
        self
    }

    /// Returns the `Hypervisor` member.
    #[must_use]
    pub fn hypervisor(&self) -> Option<&HypervisorType> {
        self.hypervisor.as_ref()
    }

    /// Sets the `Hypervisor` member, replacing any previous value.
    pub fn set_hypervisor(&mut self, hypervisor: Option<HypervisorType>) {
        self.hypervisor = hypervisor;
    }

    /// Sets the `Hypervisor` member and returns the updated value.
    #[must_use]
    pub fn with_hypervisor(mut self, hypervisor: impl Into<HypervisorType>) -> Self {
        self.hypervisor = Some(hypervisor.into());
        self
    }

    /// Returns the `ImageOwnerAlias` member.
    #[must_use]
    pub fn image_owner_alias(&self) -> Option<&str> {
        self.image_owner_alias.as_deref()
    }

    /// Sets the `ImageOwnerAlias` member, replacing any previous value.
    pub fn set_image_owner_alias(&mut self, image_owner_alias: Option<String>) {
        self.image_owner_alias = image_owner_alias;
    }

    /// Sets the `ImageOwnerAlias` member and returns the updated value.
    #[must_use]
    pub fn with_image_owner_alias(mut self, image_owner_alias: impl Into<String>) -> Self {
        self.image_owner_alias = Some(image_owner_alias.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the `RootDeviceName` member.
    #[must_use]
    pub fn root_device_name(&self) -> Option<&str> {
        self.root_device_name.as_deref()
    }

    /// Sets the `RootDeviceName` member, replacing any previous value.
    pub fn set_root_device_name(&mut self, root_device_name: Option<String>) {
        self.root_device_name = root_device_name;
    }

    /// Sets the `RootDeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_root_device_name(mut self, root_device_name: impl Into<String>) -> Self {
        self.root_device_name = Some(root_device_name.into());
        self
    }

    /// Returns the `RootDeviceType` member.
    #[must_use]
    pub fn root_device_type(&self) -> Option<&DeviceType> {
        self.root_device_type.as_ref()
    }

    /// Sets the `RootDeviceType` member, replacing any previous value.
    pub fn set_root_device_type(&mut self, root_device_type: Option<DeviceType>) {
        self.root_device_type = root_device_type;
    }

    /// Sets the `RootDeviceType` member and returns the updated value.
    #[must_use]
    pub fn with_root_device_type(mut self, root_device_type: impl Into<DeviceType>) -> Self {
        self.root_device_type = Some(root_device_type.into());
        self
    }

    /// Returns the `SriovNetSupport` member.
    #[must_use]
    pub fn sriov_net_support(&self) -> Option<&str> {
        self.sriov_net_support.as_deref()
    }

    /// Sets the `SriovNetSupport` member, replacing any previous value.
    pub fn set_sriov_net_support(&mut self, sriov_net_support: Option<String>) {
        self.sriov_net_support = sriov_net_support;
    }

    /// Sets the `SriovNetSupport` member and returns the updated value.
    #[must_use]
    pub fn with_sriov_net_support(mut self, sriov_net_support: impl Into<String>) -> Self {
        self.sriov_net_support = Some(sriov_net_support.into());
        self
    }

    /// Returns the `StateReason` member.
    #[must_use]
    pub fn state_reason(&self) -> Option<&StateReason> {
        self.state_reason.as_ref()
    }

    /// Sets the `StateReason` member, replacing any previous value.
    pub fn set_state_reason(&mut self, state_reason: Option<StateReason>) {
        self.state_reason = state_reason;
    }

    /// Sets the `StateReason` member and returns the updated value.
    #[must_use]
    pub fn with_state_reason(mut self, state_reason: impl Into<StateReason>) -> Self {
        self.state_reason = Some(state_reason.into());
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

    /// Returns the `VirtualizationType` member.
    #[must_use]
    pub fn virtualization_type(&self) -> Option<&VirtualizationType> {
        self.virtualization_type.as_ref()
    }

    /// Sets the `VirtualizationType` member, replacing any previous value.
    pub fn set_virtualization_type(&mut self, virtualization_type: Option<VirtualizationType>) {
        self.virtualization_type = virtualization_type;
    }

    /// Sets the `VirtualizationType` member and returns the updated value.
    #[must_use]
    pub fn with_virtualization_type(
        mut self,
        virtualization_type: impl Into<VirtualizationType>,
    ) -> Self {
        self.virtualization_type = Some(virtualization_type.into());
        self
    }
}

impl Shape for Image {
    const SHAPE_NAME: &'static str = "Image";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Architecture", false, self.architecture.as_ref()),
            Member::new("CreationDate", false, self.creation_date.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("ImageLocation", false, self.image_location.as_ref()),
            Member::new("ImageType", false, self.image_type.as_ref()),
            Member::new("Public", false, self.public.as_ref()),
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("Platform", false, self.platform.as_ref()),
            Member::new("PlatformDetails", false, self.platform_details.as_ref()),
            Member::new("UsageOperation", false, self.usage_operation.as_ref()),
            Member::new("ProductCodes", false, self.product_codes.as_ref()),
            Member::new("RamdiskId", false, self.ramdisk_id.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("EnaSupport", false, self.ena_support.as_ref()),
            Member::new("Hypervisor", false, self.hypervisor.as_ref()),
            Member::new("ImageOwnerAlias", false, self.image_owner_alias.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
            Member::new("RootDeviceName", false, self.root_device_name.as_ref()),
            Member::new("RootDeviceType", false, self.root_device_type.as_ref()),
            Member::new("SriovNetSupport", false, self.sriov_net_support.as_ref()),
            Member::new("StateReason", false, self.state_reason.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("VirtualizationType", false, self.virtualization_type.as_ref()),
        ]
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ImageDiskContainer.
///
/// Describes the disk container object for an import image task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDiskContainer {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// The format of the disk image being imported.
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "UserBucket", skip_serializing_if = "Option::is_none")]
    pub user_bucket: Option<UserBucket>,
}

impl ImageDiskContainer {
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

    /// Returns the `DeviceName` member.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Sets the `DeviceName` member, replacing any previous value.
    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    /// Sets the `DeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Returns the `Format` member.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Sets the `Format` member, replacing any previous value.
    pub fn set_format(&mut self, format: Option<String>) {
        self.format = format;
    }

    /// Sets the `Format` member and returns the updated value.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
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

    /// Returns the `Url` member.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Sets the `Url` member, replacing any previous value.
    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    /// Sets the `Url` member and returns the updated value.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the `UserBucket` member.
    #[must_use]
    pub fn user_bucket(&self) -> Option<&UserBucket> {
        self.user_bucket.as_ref()
    }

    /// Sets the `UserBucket` member, replacing any previous value.
    pub fn set_user_bucket(&mut self, user_bucket: Option<UserBucket>) {
        self.user_bucket = user_bucket;
    }

    /// Sets the `UserBucket` member and returns the updated value.
    #[must_use]
    pub fn with_user_bucket(mut self, user_bucket: impl Into<UserBucket>) -> Self {
        self.user_bucket = Some(user_bucket.into());
        self
    }
}

impl Shape for ImageDiskContainer {
    const SHAPE_NAME: &'static str = "ImageDiskContainer";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Description", false, self.description.as_ref()),
            Member::new("DeviceName", false, self.device_name.as_ref()),
            Member::new("Format", false, self.format.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("Url", false, self.url.as_ref()),
            Member::new("UserBucket", false, self.user_bucket.as_ref()),
        ]
    }
}

impl fmt::Display for ImageDiskContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ImportImageLicenseConfigurationRequest.
///
/// The request information of license configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportImageLicenseConfigurationRequest {
    #[serde(rename = "LicenseConfigurationArn", skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl ImportImageLicenseConfigurationRequest {
    /// Returns the `LicenseConfigurationArn` member.
    #[must_use]
    pub fn license_configuration_arn(&self) -> Option<&str> {
        self.license_configuration_arn.as_deref()
    }

    /// Sets the `LicenseConfigurationArn` member, replacing any previous value.
    pub fn set_license_configuration_arn(&mut self, license_configuration_arn: Option<String>) {
        self.license_configuration_arn = license_configuration_arn;
    }

    /// Sets the `LicenseConfigurationArn` member and returns the updated value.
    #[must_use]
    pub fn with_license_configuration_arn(
        mut self,
        license_configuration_arn: impl Into<String>,
    ) -> Self {
        self.license_configuration_arn = Some(license_configuration_arn.into());
        self
    }
}

impl Shape for ImportImageLicenseConfigurationRequest {
    const SHAPE_NAME: &'static str = "ImportImageLicenseConfigurationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LicenseConfigurationArn", false, self.license_configuration_arn.as_ref()),
        ]
    }
}

impl fmt::Display for ImportImageLicenseConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ImportImageLicenseConfigurationResponse.
///
/// The response information for license configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportImageLicenseConfigurationResponse {
    #[serde(rename = "LicenseConfigurationArn", skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl ImportImageLicenseConfigurationResponse {
    /// Returns the `LicenseConfigurationArn` member.
    #[must_use]
    pub fn license_configuration_arn(&self) -> Option<&str> {
        self.license_configuration_arn.as_deref()
    }

    /// Sets the `LicenseConfigurationArn` member, replacing any previous value.
    pub fn set_license_configuration_arn(&mut self, license_configuration_arn: Option<String>) {
        self.license_configuration_arn = license_configuration_arn;
    }

    /// Sets the `LicenseConfigurationArn` member and returns the updated value.
    #[must_use]
    pub fn with_license_configuration_arn(
        mut self,
        license_configuration_arn: impl Into<String>,
    ) -> Self {
        self.license_configuration_arn = Some(license_configuration_arn.into());
        self
    }
}

impl Shape for ImportImageLicenseConfigurationResponse {
    const SHAPE_NAME: &'static str = "ImportImageLicenseConfigurationResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LicenseConfigurationArn", false, self.license_configuration_arn.as_ref()),
        ]
    }
}

impl fmt::Display for ImportImageLicenseConfigurationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InferenceAcceleratorInfo.
///
/// Describes the Inference accelerators for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InferenceAcceleratorInfo {
    #[serde(rename = "Accelerators", skip_serializing_if = "Option::is_none")]
    pub accelerators: Option<Vec<InferenceDeviceInfo>>,
}

impl InferenceAcceleratorInfo {
    /// Returns the `Accelerators` member.
    #[must_use]
    pub fn accelerators(&self) -> Option<&[InferenceDeviceInfo]> {
        self.accelerators.as_deref()
    }

    /// Sets the `Accelerators` member, replacing any previous value.
    pub fn set_accelerators(&mut self, accelerators: Option<Vec<InferenceDeviceInfo>>) {
        self.accelerators = accelerators;
    }

    /// Appends to the `Accelerators` member and returns the updated value.
    #[must_use]
    pub fn with_accelerators(
        mut self,
        accelerators: impl IntoIterator<Item = impl Into<InferenceDeviceInfo>>,
    ) -> Self {
        self.accelerators
            .get_or_insert_with(Vec::new)
            .extend(accelerators.into_iter().map(Into::into));
        self
    }
}

impl Shape for InferenceAcceleratorInfo {
    const SHAPE_NAME: &'static str = "InferenceAcceleratorInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Accelerators", false, self.accelerators.as_ref()),
        ]
    }
}

impl fmt::Display for InferenceAcceleratorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InferenceDeviceInfo.
///
/// Describes the Inference accelerators for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InferenceDeviceInfo {
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Manufacturer", skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

impl InferenceDeviceInfo {
    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the `Manufacturer` member.
    #[must_use]
    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    /// Sets the `Manufacturer` member, replacing any previous value.
    pub fn set_manufacturer(&mut self, manufacturer: Option<String>) {
        self.manufacturer = manufacturer;
    }

    /// Sets the `Manufacturer` member and returns the updated value.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }
}

impl Shape for InferenceDeviceInfo {
    const SHAPE_NAME: &'static str = "InferenceDeviceInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Count", false, self.count.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
            Member::new("Manufacturer", false, self.manufacturer.as_ref()),
        ]
    }
}

impl fmt::Display for InferenceDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Instance.
///
/// Describes an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance {
    /// The AMI launch index.
    #[serde(rename = "AmiLaunchIndex", skip_serializing_if = "Option::is_none")]
    pub ami_launch_index: Option<i32>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    /// The time the instance was launched.
    #[serde(rename = "LaunchTime", skip_serializing_if = "Option::is_none")]
    pub launch_time: Option<DateTime<Utc>>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<Monitoring>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformValues>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "ProductCodes", skip_serializing_if = "Option::is_none")]
    pub product_codes: Option<Vec<ProductCode>>,
    #[serde(rename = "PublicDnsName", skip_serializing_if = "Option::is_none")]
    pub public_dns_name: Option<String>,
    #[serde(rename = "PublicIpAddress", skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<String>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    /// The current state of the instance.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<InstanceState>,
    #[serde(rename = "StateTransitionReason", skip_serializing_if = "Option::is_none")]
    pub state_transition_reason: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(rename = "Architecture", skip_serializing_if = "Option::is_none")]
    pub architecture: Option<ArchitectureValues>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<InstanceBlockDeviceMapping>>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "EnaSupport", skip_serializing_if = "Option::is_none")]
    pub ena_support: Option<bool>,
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<HypervisorType>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfile>,
    #[serde(rename = "InstanceLifecycle", skip_serializing_if = "Option::is_none")]
    pub instance_lifecycle: Option<InstanceLifecycleType>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<InstanceNetworkInterface>>,
    #[serde(rename = "OutpostArn", skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    #[serde(rename = "RootDeviceName", skip_serializing_if = "Option::is_none")]
    pub root_device_name: Option<String>,
    #[serde(rename = "RootDeviceType", skip_serializing_if = "Option::is_none")]
    pub root_device_type: Option<DeviceType>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "SourceDestCheck", skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<bool>,
    #[serde(rename = "SpotInstanceRequestId", skip_serializing_if = "Option::is_none")]
    pub spot_instance_request_id: Option<String>,
    #[serde(rename = "SriovNetSupport", skip_serializing_if = "Option::is_none")]
    pub sriov_net_support: Option<String>,
    #[serde(rename = "StateReason", skip_serializing_if = "Option::is_none")]
    pub state_reason: Option<StateReason>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "VirtualizationType", skip_serializing_if = "Option::is_none")]
    pub virtualization_type: Option<VirtualizationType>,
    #[serde(rename = "CpuOptions", skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<CpuOptions>,
    #[serde(rename = "CapacityReservationId", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_id: Option<String>,
    #[serde(rename = "CapacityReservationSpecification", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_specification: Option<CapacityReservationSpecificationResponse>,
    #[serde(rename = "HibernationOptions", skip_serializing_if = "Option::is_none")]
    pub hibernation_options: Option<HibernationOptions>,
    #[serde(rename = "Licenses", skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<LicenseConfiguration>>,
    /// The metadata options for the instance.
    #[serde(rename = "MetadataOptions", skip_serializing_if = "Option::is_none")]
    pub metadata_options: Option<InstanceMetadataOptionsResponse>,
}

impl Instance {
    /// Returns the `AmiLaunchIndex` member.
    #[must_use]
    pub fn ami_launch_index(&self) -> Option<i32> {
        self.ami_launch_index
    }

    /// Sets the `AmiLaunchIndex` member, replacing any previous value.
    pub fn set_ami_launch_index(&mut self, ami_launch_index: Option<i32>) {
        self.ami_launch_index = ami_launch_index;
    }

    /// Sets the `AmiLaunchIndex` member and returns the updated value.
    #[must_use]
    pub fn with_ami_launch_index(mut self, ami_launch_index: impl Into<i32>) -> Self {
        self.ami_launch_index = Some(ami_launch_index.into());
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

    /// Returns the `LaunchTime` member.
    #[must_use]
    pub fn launch_time(&self) -> Option<&DateTime<Utc>> {
        self.launch_time.as_ref()
    }

    /// Sets the `LaunchTime` member, replacing any previous value.
    pub fn set_launch_time(&mut self, launch_time: Option<DateTime<Utc>>) {
        self.launch_time = launch_time;
    }

    /// Sets the `LaunchTime` member and returns the updated value.
    #[must_use]
    pub fn with_launch_time(mut self, launch_time: impl Into<DateTime<Utc>>) -> Self {
        self.launch_time = Some(launch_time.into());
        self
    }

    /// Returns the `Monitoring` member.
    #[must_use]
    pub fn monitoring(&self) -> Option<&Monitoring> {
        self.monitoring.as_ref()
    }

    /// Sets the `Monitoring` member, replacing any previous value.
    pub fn set_monitoring(&mut self, monitoring: Option<Monitoring>) {
        self.monitoring = monitoring;
    }

    /// Sets the `Monitoring` member and returns the updated value.
    #[must_use]
    pub fn with_monitoring(mut self, monitoring: impl Into<Monitoring>) -> Self {
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

    /// Returns the `Platform` member.
    #[must_use]
    pub fn platform(&self) -> Option<&PlatformValues> {
        self.platform.as_ref()
    }

    /// Sets the `Platform` member, replacing any previous value.
    pub fn set_platform(&mut self, platform: Option<PlatformValues>) {
        self.platform = platform;
    }

    /// Sets the `Platform` member and returns the updated value.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<PlatformValues>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Returns the `PrivateDnsName` member.
    #[must_use]
    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// Sets the `PrivateDnsName` member, replacing any previous value.
    pub fn set_private_dns_name(&mut self, private_dns_name: Option<String>) {
        self.private_dns_name = private_dns_name;
    }

    /// Sets the `PrivateDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: impl Into<String>) -> Self {
        self.private_dns_name = Some(private_dns_name.into());
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

    /// Returns the `ProductCodes` member.
    #[must_use]
    pub fn product_codes(&self) -> Option<&[ProductCode]> {
        self.product_codes.as_deref()
    }

    /// Sets the `ProductCodes` member, replacing any previous value.
    pub fn set_product_codes(&mut self, product_codes: Option<Vec<ProductCode>>) {
        self.product_codes = product_codes;
    }

    /// Appends to the `ProductCodes` member and returns the updated value.
    #[must_use]
    pub fn with_product_codes(
        mut self,
        product_codes: impl IntoIterator<Item = impl Into<ProductCode>>,
    ) -> Self {
        self.product_codes
            .get_or_insert_with(Vec::new)
            .extend(product_codes.into_iter().map(Into::into));
        self
    }

    /// Returns the `PublicDnsName` member.
    #[must_use]
    pub fn public_dns_name(&self) -> Option<&str> {
        self.public_dns_name.as_deref()
    }

    /// Sets the `PublicDnsName` member, replacing any previous value.
    pub fn set_public_dns_name(&mut self, public_dns_name: Option<String>) {
        self.public_dns_name = public_dns_name;
    }

    /// Sets the `PublicDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_public_dns_name(mut self, public_dns_name: impl Into<String>) -> Self {
        self.public_dns_name = Some(public_dns_name.into());
        self
    }

    /// Returns the `PublicIpAddress` member.
    #[must_use]
    pub fn public_ip_address(&self) -> Option<&str> {
        self.public_ip_address.as_deref()
    }

    /// Sets the `PublicIpAddress` member, replacing any previous value.
    pub fn set_public_ip_address(&mut self, public_ip_address: Option<String>) {
        self.public_ip_address = public_ip_address;
    }

    /// Sets the `PublicIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_public_ip_address(mut self, public_ip_address: impl Into<String>) -> Self {
        self.public_ip_address = Some(public_ip_address.into());
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

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&InstanceState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<InstanceState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<InstanceState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `StateTransitionReason` member.
    #[must_use]
    pub fn state_transition_reason(&self) -> Option<&str> {
        self.state_transition_reason.as_deref()
    }

    /// Sets the `StateTransitionReason` member, replacing any previous value.
    pub fn set_state_transition_reason(&mut self, state_transition_reason: Option<String>) {
        self.state_transition_reason = state_transition_reason;
    }

    /// Sets the `StateTransitionReason` member and returns the updated value.
    #[must_use]
    pub fn with_state_transition_reason(
        mut self,
        state_transition_reason: impl Into<String>,
    ) -> Self {
        self.state_transition_reason = Some(state_transition_reason.into());
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

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }

    /// Returns the `Architecture` member.
    #[must_use]
    pub fn architecture(&self) -> Option<&ArchitectureValues> {
        self.architecture.as_ref()
    }

    /// Sets the `Architecture` member, replacing any previous value.
    pub fn set_architecture(&mut self, architecture: Option<ArchitectureValues>) {
        self.architecture = architecture;
    }

    /// Sets the `Architecture` member and returns the updated value.
    #[must_use]
    pub fn with_architecture(mut self, architecture: impl Into<ArchitectureValues>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }

    /// Returns the `BlockDeviceMappings` member.
    #[must_use]
    pub fn block_device_mappings(&self) -> Option<&[InstanceBlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    /// Sets the `BlockDeviceMappings` member, replacing any previous value.
    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Option<Vec<InstanceBlockDeviceMapping>>,
    ) {
        self.block_device_mappings = block_device_mappings;
    }

    /// Appends to the `BlockDeviceMappings` member and returns the updated value.
    #[must_use]
    pub fn with_block_device_mappings(
        mut self,
        block_device_mappings: impl IntoIterator<Item = impl Into<InstanceBlockDeviceMapping>>,
    ) -> Self {
        self.block_device_mappings
            .get_or_insert_with(Vec::new)
            .extend(block_device_mappings.into_iter().map(Into::into));
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

    /// Returns the `EnaSupport` member.
    #[must_use]
    pub fn ena_support(&self) -> Option<bool> {
        self.ena_support
    }

    /// Sets the `EnaSupport` member, replacing any previous value.
    pub fn set_ena_support(&mut self, ena_support: Option<bool>) {
        self.ena_support = ena_support;
    }

    /// Sets the `EnaSupport` member and returns the updated value.
    #[must_use]
    pub fn with_ena_support(mut self, ena_support: impl Into<bool>) -> Self {
        self.ena_support = Some(ena_support.into());
        self
    }

    /// Returns the `Hypervisor` member.
    #[must_use]
    pub fn hypervisor(&self) -> Option<&HypervisorType> {
        self.hypervisor.as_ref()
    }

    /// Sets the `Hypervisor` member, replacing any previous value.
    pub fn set_hypervisor(&mut self, hypervisor: Option<HypervisorType>) {
        self.hypervisor = hypervisor;
    }

    /// Sets the `Hypervisor` member and returns the updated value.
    #[must_use]
    pub fn with_hypervisor(mut self, hypervisor: impl Into<HypervisorType>) -> Self {
        self.hypervisor = Some(hypervisor.into());
        self
    }

    /// Returns the `IamInstanceProfile` member.
    #[must_use]
    pub fn iam_instance_profile(&self) -> Option<&IamInstanceProfile> {
        self.iam_instance_profile.as_ref()
    }

    /// Sets the `IamInstanceProfile` member, replacing any previous value.
    pub fn set_iam_instance_profile(&mut self, iam_instance_profile: Option<IamInstanceProfile>) {
        self.iam_instance_profile = iam_instance_profile;
    }

    /// Sets the `IamInstanceProfile` member and returns the updated value.
    #[must_use]
    pub fn with_iam_instance_profile(
        mut self,
        iam_instance_profile: impl Into<IamInstanceProfile>,
    ) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile.into());
        self
    }

    /// Returns the `InstanceLifecycle` member.
    #[must_use]
    pub fn instance_lifecycle(&self) -> Option<&InstanceLifecycleType> {
        self.instance_lifecycle.as_ref()
    }

    /// Sets the `InstanceLifecycle` member, replacing any previous value.
    pub fn set_instance_lifecycle(&mut self, instance_lifecycle: Option<InstanceLifecycleType>) {
        self.instance_lifecycle = instance_lifecycle;
    }

    /// Sets the `InstanceLifecycle` member and returns the updated value.
    #[must_use]
    pub fn with_instance_lifecycle(
        mut self,
        instance_lifecycle: impl Into<InstanceLifecycleType>,
    ) -> Self {
        self.instance_lifecycle = Some(instance_lifecycle.into());
        self
    }

    /// Returns the `NetworkInterfaces` member.
    #[must_use]
    pub fn network_interfaces(&self) -> Option<&[InstanceNetworkInterface]> {
        self.network_interfaces.as_deref()
    }

    /// Sets the `NetworkInterfaces` member, replacing any previous value.
    pub fn set_network_interfaces(
        &mut self,
        network_interfaces: Option<Vec<InstanceNetworkInterface>>,
    ) {
        self.network_interfaces = network_interfaces;
    }

    /// Appends to the `NetworkInterfaces` member and returns the updated value.
    #[must_use]
    pub fn with_network_interfaces(
        mut self,
        network_interfaces: impl IntoIterator<Item = impl Into<InstanceNetworkInterface>>,
    ) -> Self {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .extend(network_interfaces.into_iter().map(Into::into));
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

    /// Returns the `RootDeviceName` member.
    #[must_use]
    pub fn root_device_name(&self) -> Option<&str> {
        self.root_device_name.as_deref()
    }

    /// Sets the `RootDeviceName` member, replacing any previous value.
    pub fn set_root_device_name(&mut self, root_device_name: Option<String>) {
        self.root_device_name = root_device_name;
    }

    /// Sets the `RootDeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_root_device_name(mut self, root_device_name: impl Into<String>) -> Self {
        self.root_device_name = Some(root_device_name.into());
        self
    }

    /// Returns the `RootDeviceType` member.
    #[must_use]
    pub fn root_device_type(&self) -> Option<&DeviceType> {
        self.root_device_type.as_ref()
    }

    /// Sets the `RootDeviceType` member, replacing any previous value.
    pub fn set_root_device_type(&mut self, root_device_type: Option<DeviceType>) {
        self.root_device_type = root_device_type;
    }

    /// Sets the `RootDeviceType` member and returns the updated value.
    #[must_use]
    pub fn with_root_device_type(mut self, root_device_type: impl Into<DeviceType>) -> Self {
        self.root_device_type = Some(root_device_type.into());
        self
    }

    /// Returns the `SecurityGroups` member.
    #[must_use]
    pub fn security_groups(&self) -> Option<&[GroupIdentifier]> {
        self.security_groups.as_deref()
    }

    /// Sets the `SecurityGroups` member, replacing any previous value.
    pub fn set_security_groups(&mut self, security_groups: Option<Vec<GroupIdentifier>>) {
        self.security_groups = security_groups;
    }

    /// Appends to the `SecurityGroups` member and returns the updated value.
    #[must_use]
    pub fn with_security_groups(
        mut self,
        security_groups: impl IntoIterator<Item = impl Into<GroupIdentifier>>,
    ) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `SourceDestCheck` member.
    #[must_use]
    pub fn source_dest_check(&self) -> Option<bool> {
        self.source_dest_check
    }

    /// Sets the `SourceDestCheck` member, replacing any previous value.
    pub fn set_source_dest_check(&mut self, source_dest_check: Option<bool>) {
        self.source_dest_check = source_dest_check;
    }

    /// Sets the `SourceDestCheck` member and returns the updated value.
    #[must_use]
    pub fn with_source_dest_check(mut self, source_dest_check: impl Into<bool>) -> Self {
        self.source_dest_check = Some(source_dest_check.into());
        self
    }

    /// Returns the `SpotInstanceRequestId` member.
    #[must_use]
    pub fn spot_instance_request_id(&self) -> Option<&str> {
        self.spot_instance_request_id.as_deref()
    }

    /// Sets the `SpotInstanceRequestId` member, replacing any previous value.
    pub fn set_spot_instance_request_id(&mut self, spot_instance_request_id: Option<String>) {
        self.spot_instance_request_id = spot_instance_request_id;
    }

    /// Sets the `SpotInstanceRequestId` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_request_id(
        mut self,
        spot_instance_request_id: impl Into<String>,
    ) -> Self {
        self.spot_instance_request_id = Some(spot_instance_request_id.into());
        self
    }

    /// Returns the `SriovNetSupport` member.
    #[must_use]
    pub fn sriov_net_support(&self) -> Option<&str> {
        self.sriov_net_support.as_deref()
    }

    /// Sets the `SriovNetSupport` member, replacing any previous value.
    pub fn set_sriov_net_support(&mut self, sriov_net_support: Option<String>) {
        self.sriov_net_support = sriov_net_support;
    }

    /// Sets the `SriovNetSupport` member and returns the updated value.
    #[must_use]
    pub fn with_sriov_net_support(mut self, sriov_net_support: impl Into<String>) -> Self {
        self.sriov_net_support = Some(sriov_net_support.into());
        self
    }

    /// Returns the `StateReason` member.
    #[must_use]
    pub fn state_reason(&self) -> Option<&StateReason> {
        self.state_reason.as_ref()
    }

    /// Sets the `StateReason` member, replacing any previous value.
    pub fn set_state_reason(&mut self, state_reason: Option<StateReason>) {
        self.state_reason = state_reason;
    }

    /// Sets the `StateReason` member and returns the updated value.
    #[must_use]
    pub fn with_state_reason(mut self, state_reason: impl Into<StateReason>) -> Self {
        self.state_reason = Some(state_reason.into());
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

    /// Returns the `VirtualizationType` member.
    #[must_use]
    pub fn virtualization_type(&self) -> Option<&VirtualizationType> {
        self.virtualization_type.as_ref()
    }

    /// Sets the `VirtualizationType` member, replacing any previous value.
    pub fn set_virtualization_type(&mut self, virtualization_type: Option<VirtualizationType>) {
        self.virtualization_type = virtualization_type;
    }

    /// Sets the `VirtualizationType` member and returns the updated value.
    #[must_use]
    pub fn with_virtualization_type(
        mut self,
        virtualization_type: impl Into<VirtualizationType>,
    ) -> Self {
        self.virtualization_type = Some(virtualization_type.into());
        self
    }

    /// Returns the `CpuOptions` member.
    #[must_use]
    pub fn cpu_options(&self) -> Option<&CpuOptions> {
        self.cpu_options.as_ref()
    }

    /// Sets the `CpuOptions` member, replacing any previous value.
    pub fn set_cpu_options(&mut self, cpu_options: Option<CpuOptions>) {
        self.cpu_options = cpu_options;
    }

    /// Sets the `CpuOptions` member and returns the updated value.
    #[must_use]
    pub fn with_cpu_options(mut self, cpu_options: impl Into<CpuOptions>) -> Self {
        self.cpu_options = Some(cpu_options.into());
        self
    }

    /// Returns the `CapacityReservationId` member.
    #[must_use]
    pub fn capacity_reservation_id(&self) -> Option<&str> {
        self.capacity_reservation_id.as_deref()
    }

    /// Sets the `CapacityReservationId` member, replacing any previous value.
    pub fn set_capacity_reservation_id(&mut self, capacity_reservation_id: Option<String>) {
        self.capacity_reservation_id = capacity_reservation_id;
    }

    /// Sets the `CapacityReservationId` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_id(
        mut self,
        capacity_reservation_id: impl Into<String>,
    ) -> Self {
        self.capacity_reservation_id = Some(capacity_reservation_id.into());
        self
    }

    /// Returns the `CapacityReservationSpecification` member.
    #[must_use]
    pub fn capacity_reservation_specification(
        &self,
    ) -> Option<&CapacityReservationSpecificationResponse> {
        self.capacity_reservation_specification.as_ref()
    }

    /// Sets the `CapacityReservationSpecification` member, replacing any previous value.
    pub fn set_capacity_reservation_specification(
        &mut self,
        capacity_reservation_specification: Option<CapacityReservationSpecificationResponse>,
    ) {
        self.capacity_reservation_specification = capacity_reservation_specification;
    }

    /// Sets the `CapacityReservationSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_specification(
        mut self,
        capacity_reservation_specification: impl Into<CapacityReservationSpecificationResponse>,
    ) -> Self {
        self.capacity_reservation_specification = Some(capacity_reservation_specification.into());
        self
    }

    /// Returns the `HibernationOptions` member.
    #[must_use]
    pub fn hibernation_options(&self) -> Option<&HibernationOptions> {
        self.hibernation_options.as_ref()
    }

    /// Sets the `HibernationOptions` member, replacing any previous value.
    pub fn set_hibernation_options(&mut self, hibernation_options: Option<HibernationOptions>) {
        self.hibernation_options = hibernation_options;
    }

    /// Sets the `HibernationOptions` member and returns the updated value.
    #[must_use]
    pub fn with_hibernation_options(
        mut self,
        hibernation_options: impl Into<HibernationOptions>,
    ) -> Self {
        self.hibernation_options = Some(hibernation_options.into());
        self
    }

    /// Returns the `Licenses` member.
    #[must_use]
    pub fn licenses(&self) -> Option<&[LicenseConfiguration]> {
        self.licenses.as_deref()
    }

    /// Sets the `Licenses` member, replacing any previous value.
    pub fn set_licenses(&mut self, licenses: Option<Vec<LicenseConfiguration>>) {
        self.licenses = licenses;
    }

    /// Appends to the `Licenses` member and returns the updated value.
    #[must_use]
    pub fn with_licenses(
        mut self,
        licenses: impl IntoIterator<Item = impl Into<LicenseConfiguration>>,
    ) -> Self {
        self.licenses
            .get_or_insert_with(Vec::new)
            .extend(licenses.into_iter().map(Into::into));
        self
    }

    /// Returns the `MetadataOptions` member.
    #[must_use]
    pub fn metadata_options(&self) -> Option<&InstanceMetadataOptionsResponse> {
        self.metadata_options.as_ref()
    }

    /// Sets the `MetadataOptions` member, replacing any previous value.
    pub fn set_metadata_options(
        &mut self,
        metadata_options: Option<InstanceMetadataOptionsResponse>,
    ) {
        self.metadata_options = metadata_options;
    }

    /// Sets the `MetadataOptions` member and returns the updated value.
    #[must_use]
    pub fn with_metadata_options(
        mut self,
        metadata_options: impl Into<InstanceMetadataOptionsResponse>,
    ) -> Self {
        self.metadata_options = Some(metadata_options.into());
        self
    }
}

impl Shape for Instance {
    const SHAPE_NAME: &'static str = "Instance";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AmiLaunchIndex", false, self.ami_launch_index.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("InstanceId", false, self.instance_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("KeyName", false, self.key_name.as_ref()),
            Member::new("LaunchTime", false, self.launch_time.as_ref()),
            Member::new("Monitoring", false, self.monitoring.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
            Member::new("Platform", false, self.platform.as_ref()),
            Member::new("PrivateDnsName", false, self.private_dns_name.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("ProductCodes", false, self.product_codes.as_ref()),
            Member::new("PublicDnsName", false, self.public_dns_name.as_ref()),
            Member::new("PublicIpAddress", false, self.public_ip_address.as_ref()),
            Member::new("RamdiskId", false, self.ramdisk_id.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("StateTransitionReason", false, self.state_transition_reason.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
            Member::new("Architecture", false, self.architecture.as_ref()),
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("EnaSupport", false, self.ena_support.as_ref()),
            Member::new("Hypervisor", false, self.hypervisor.as_ref()),
            Member::new("IamInstanceProfile", false, self.iam_instance_profile.as_ref()),
            Member::new("InstanceLifecycle", false, self.instance_lifecycle.as_ref()),
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("OutpostArn", false, self.outpost_arn.as_ref()),
            Member::new("RootDeviceName", false, self.root_device_name.as_ref()),
            Member::new("RootDeviceType", false, self.root_device_type.as_ref()),
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("SourceDestCheck", false, self.source_dest_check.as_ref()),
            Member::new("SpotInstanceRequestId", false, self.spot_instance_request_id.as_ref()),
            Member::new("SriovNetSupport", false, self.sriov_net_support.as_ref()),
            Member::new("StateReason", false, self.state_reason.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("VirtualizationType", false, self.virtualization_type.as_ref()),
            Member::new("CpuOptions", false, self.cpu_options.as_ref()),
            Member::new("CapacityReservationId", false, self.capacity_reservation_id.as_ref()),
            Member::new(
                "CapacityReservationSpecification",
                false,
                self.capacity_reservation_specification.as_ref(),
            ),
            Member::new("HibernationOptions", false, self.hibernation_options.as_ref()),
            Member::new("Licenses", false, self.licenses.as_ref()),
            Member::new("MetadataOptions", false, self.metadata_options.as_ref()),
        ]
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceBlockDeviceMapping.
///
/// Describes a block device mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceBlockDeviceMapping {
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    pub ebs: Option<EbsInstanceBlockDevice>,
}

impl InstanceBlockDeviceMapping {
    /// Returns the `DeviceName` member.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Sets the `DeviceName` member, replacing any previous value.
    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    /// Sets the `DeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Returns the `Ebs` member.
    #[must_use]
    pub fn ebs(&self) -> Option<&EbsInstanceBlockDevice> {
        self.ebs.as_ref()
    }

    /// Sets the `Ebs` member, replacing any previous value.
    pub fn set_ebs(&mut self, ebs: Option<EbsInstanceBlockDevice>) {
        self.ebs = ebs;
    }

    /// Sets the `Ebs` member and returns the updated value.
    #[must_use]
    pub fn with_ebs(mut self, ebs: impl Into<EbsInstanceBlockDevice>) -> Self {
        self.ebs = Some(ebs.into());
        self
    }
}

impl Shape for InstanceBlockDeviceMapping {
    const SHAPE_NAME: &'static str = "InstanceBlockDeviceMapping";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DeviceName", false, self.device_name.as_ref()),
            Member::new("Ebs", false, self.ebs.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceBlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceIpv6Address.
///
/// Describes an IPv6 address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceIpv6Address {
    /// The IPv6 address.
    #[serde(rename = "Ipv6Address", skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

impl InstanceIpv6Address {
    /// Returns the `Ipv6Address` member.
    #[must_use]
    pub fn ipv6_address(&self) -> Option<&str> {
        self.ipv6_address.as_deref()
    }

    /// Sets the `Ipv6Address` member, replacing any previous value.
    pub fn set_ipv6_address(&mut self, ipv6_address: Option<String>) {
        self.ipv6_address = ipv6_address;
    }

    /// Sets the `Ipv6Address` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_address(mut self, ipv6_address: impl Into<String>) -> Self {
        self.ipv6_address = Some(ipv6_address.into());
        self
    }
}

impl Shape for InstanceIpv6Address {
    const SHAPE_NAME: &'static str = "InstanceIpv6Address";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Ipv6Address", false, self.ipv6_address.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceIpv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceIpv6AddressRequest.
///
/// Describes an IPv6 address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceIpv6AddressRequest {
    #[serde(rename = "Ipv6Address", skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

impl InstanceIpv6AddressRequest {
    /// Returns the `Ipv6Address` member.
    #[must_use]
    pub fn ipv6_address(&self) -> Option<&str> {
        self.ipv6_address.as_deref()
    }

    /// Sets the `Ipv6Address` member, replacing any previous value.
    pub fn set_ipv6_address(&mut self, ipv6_address: Option<String>) {
        self.ipv6_address = ipv6_address;
    }

    /// Sets the `Ipv6Address` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_address(mut self, ipv6_address: impl Into<String>) -> Self {
        self.ipv6_address = Some(ipv6_address.into());
        self
    }
}

impl Shape for InstanceIpv6AddressRequest {
    const SHAPE_NAME: &'static str = "InstanceIpv6AddressRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Ipv6Address", false, self.ipv6_address.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceIpv6AddressRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceMarketOptionsRequest.
///
/// Describes the market (purchasing) option for the instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceMarketOptionsRequest {
    /// The market type.
    #[serde(rename = "MarketType", skip_serializing_if = "Option::is_none")]
    pub market_type: Option<MarketType>,
    #[serde(rename = "SpotOptions", skip_serializing_if = "Option::is_none")]
    pub spot_options: Option<SpotMarketOptions>,
}

impl InstanceMarketOptionsRequest {
    /// Returns the `MarketType` member.
    #[must_use]
    pub fn market_type(&self) -> Option<&MarketType> {
        self.market_type.as_ref()
    }

    /// Sets the `MarketType` member, replacing any previous value.
    pub fn set_market_type(&mut self, market_type: Option<MarketType>) {
        self.market_type = market_type;
    }

    /// Sets the `MarketType` member and returns the updated value.
    #[must_use]
    pub fn with_market_type(mut self, market_type: impl Into<MarketType>) -> Self {
        self.market_type = Some(market_type.into());
        self
    }

    /// Returns the `SpotOptions` member.
    #[must_use]
    pub fn spot_options(&self) -> Option<&SpotMarketOptions> {
        self.spot_options.as_ref()
    }

    /// Sets the `SpotOptions` member, replacing any previous value.
    pub fn set_spot_options(&mut self, spot_options: Option<SpotMarketOptions>) {
        self.spot_options = spot_options;
    }

    /// Sets the `SpotOptions` member and returns the updated value.
    #[must_use]
    pub fn with_spot_options(mut self, spot_options: impl Into<SpotMarketOptions>) -> Self {
        self.spot_options = Some(spot_options.into());
        self
    }
}

impl Shape for InstanceMarketOptionsRequest {
    const SHAPE_NAME: &'static str = "InstanceMarketOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("MarketType", false, self.market_type.as_ref()),
            Member::new("SpotOptions", false, self.spot_options.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceMarketOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceMetadataOptionsRequest.
///
/// The metadata options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceMetadataOptionsRequest {
    #[serde(rename = "HttpTokens", skip_serializing_if = "Option::is_none")]
    pub http_tokens: Option<HttpTokensState>,
    #[serde(rename = "HttpPutResponseHopLimit", skip_serializing_if = "Option::is_none")]
    pub http_put_response_hop_limit: Option<i32>,
    #[serde(rename = "HttpEndpoint", skip_serializing_if = "Option::is_none")]
    pub http_endpoint: Option<InstanceMetadataEndpointState>,
}

impl InstanceMetadataOptionsRequest {
    /// Returns the `HttpTokens` member.
    #[must_use]
    pub fn http_tokens(&self) -> Option<&HttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// Sets the `HttpTokens` member, replacing any previous value.
    pub fn set_http_tokens(&mut self, http_tokens: Option<HttpTokensState>) {
        self.http_tokens = http_tokens;
    }

    /// Sets the `HttpTokens` member and returns the updated value.
    #[must_use]
    pub fn with_http_tokens(mut self, http_tokens: impl Into<HttpTokensState>) -> Self {
        self.http_tokens = Some(http_tokens.into());
        self
    }

    /// Returns the `HttpPutResponseHopLimit` member.
    #[must_use]
    pub fn http_put_response_hop_limit(&self) -> Option<i32> {
        self.http_put_response_hop_limit
    }

    /// Sets the `HttpPutResponseHopLimit` member, replacing any previous value.
    pub fn set_http_put_response_hop_limit(&mut self, http_put_response_hop_limit: Option<i32>) {
        self.http_put_response_hop_limit = http_put_response_hop_limit;
    }

    /// Sets the `HttpPutResponseHopLimit` member and returns the updated value.
    #[must_use]
    pub fn with_http_put_response_hop_limit(
        mut self,
        http_put_response_hop_limit: impl Into<i32>,
    ) -> Self {
        self.http_put_response_hop_limit = Some(http_put_response_hop_limit.into());
        self
    }

    /// Returns the `HttpEndpoint` member.
    #[must_use]
    pub fn http_endpoint(&self) -> Option<&InstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }

    /// Sets the `HttpEndpoint` member, replacing any previous value.
    pub fn set_http_endpoint(&mut self, http_endpoint: Option<InstanceMetadataEndpointState>) {
        self.http_endpoint = http_endpoint;
    }

    /// Sets the `HttpEndpoint` member and returns the updated value.
    #[must_use]
    pub fn with_http_endpoint(
        mut self,
        http_endpoint: impl Into<InstanceMetadataEndpointState>,
    ) -> Self {
        self.http_endpoint = Some(http_endpoint.into());
        self
    }
}

impl Shape for InstanceMetadataOptionsRequest {
    const SHAPE_NAME: &'static str = "InstanceMetadataOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("HttpTokens", false, self.http_tokens.as_ref()),
            Member::new(
                "HttpPutResponseHopLimit",
                false,
                self.http_put_response_hop_limit.as_ref(),
            ),
            Member::new("HttpEndpoint", false, self.http_endpoint.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceMetadataOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceMetadataOptionsResponse.
///
/// The metadata options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceMetadataOptionsResponse {
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<InstanceMetadataOptionsState>,
    /// The state of token usage for your instance metadata requests.
    #[serde(rename = "HttpTokens", skip_serializing_if = "Option::is_none")]
    pub http_tokens: Option<HttpTokensState>,
    #[serde(rename = "HttpPutResponseHopLimit", skip_serializing_if = "Option::is_none")]
    pub http_put_response_hop_limit: Option<i32>,
    #[serde(rename = "HttpEndpoint", skip_serializing_if = "Option::is_none")]
    pub http_endpoint: Option<InstanceMetadataEndpointState>,
}

impl InstanceMetadataOptionsResponse {
    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&InstanceMetadataOptionsState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<InstanceMetadataOptionsState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<InstanceMetadataOptionsState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `HttpTokens` member.
    #[must_use]
    pub fn http_tokens(&self) -> Option<&HttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// Sets the `HttpTokens` member, replacing any previous value.
    pub fn set_http_tokens(&mut self, http_tokens: Option<HttpTokensState>) {
        self.http_tokens = http_tokens;
    }

    /// Sets the `HttpTokens` member and returns the updated value.
    #[must_use]
    pub fn with_http_tokens(mut self, http_tokens: impl Into<HttpTokensState>) -> Self {
        self.http_tokens = Some(http_tokens.into());
        self
    }

    /// Returns the `HttpPutResponseHopLimit` member.
    #[must_use]
    pub fn http_put_response_hop_limit(&self) -> Option<i32> {
        self.http_put_response_hop_limit
    }

    /// Sets the `HttpPutResponseHopLimit` member, replacing any previous value.
    pub fn set_http_put_response_hop_limit(&mut self, http_put_response_hop_limit: Option<i32>) {
        self.http_put_response_hop_limit = http_put_response_hop_limit;
    }

    /// Sets the `HttpPutResponseHopLimit` member and returns the updated value.
    #[must_use]
    pub fn with_http_put_response_hop_limit(
        mut self,
        http_put_response_hop_limit: impl Into<i32>,
    ) -> Self {
        self.http_put_response_hop_limit = Some(http_put_response_hop_limit.into());
        self
    }

    /// Returns the `HttpEndpoint` member.
    #[must_use]
    pub fn http_endpoint(&self) -> Option<&InstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }

    /// Sets the `HttpEndpoint` member, replacing any previous value.
    pub fn set_http_endpoint(&mut self, http_endpoint: Option<InstanceMetadataEndpointState>) {
        self.http_endpoint = http_endpoint;
    }

    /// Sets the `HttpEndpoint` member and returns the updated value.
    #[must_use]
    pub fn with_http_endpoint(
        mut self,
        http_endpoint: impl Into<InstanceMetadataEndpointState>,
    ) -> Self {
        self.http_endpoint = Some(http_endpoint.into());
        self
    }
}

impl Shape for InstanceMetadataOptionsResponse {
    const SHAPE_NAME: &'static str = "InstanceMetadataOptionsResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("State", false, self.state.as_ref()),
            Member::new("HttpTokens", false, self.http_tokens.as_ref()),
            Member::new(
                "HttpPutResponseHopLimit",
                false,
                self.http_put_response_hop_limit.as_ref(),
            ),
            Member::new("HttpEndpoint", false, self.http_endpoint.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceMetadataOptionsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceNetworkInterface.
///
/// Describes a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceNetworkInterface {
    #[serde(rename = "Association", skip_serializing_if = "Option::is_none")]
    pub association: Option<InstanceNetworkInterfaceAssociation>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "MacAddress", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "PrivateIpAddresses", skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<InstancePrivateIpAddress>>,
    #[serde(rename = "SourceDestCheck", skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<NetworkInterfaceStatus>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(rename = "InterfaceType", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
}

impl InstanceNetworkInterface {
    /// Returns the `Association` member.
    #[must_use]
    pub fn association(&self) -> Option<&InstanceNetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// Sets the `Association` member, replacing any previous value.
    pub fn set_association(&mut self, association: Option<InstanceNetworkInterfaceAssociation>) {
        self.association = association;
    }

    /// Sets the `Association` member and returns the updated value.
    #[must_use]
    pub fn with_association(
        mut self,
        association: impl Into<InstanceNetworkInterfaceAssociation>,
    ) -> Self {
        self.association = Some(association.into());
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

    /// Returns the `Groups` member.
    #[must_use]
    pub fn groups(&self) -> Option<&[GroupIdentifier]> {
        self.groups.as_deref()
    }

    /// Sets the `Groups` member, replacing any previous value.
    pub fn set_groups(&mut self, groups: Option<Vec<GroupIdentifier>>) {
        self.groups = groups;
    }

    /// Appends to the `Groups` member and returns the updated value.
    #[must_use]
    pub fn with_groups(
        mut self,
        groups: impl IntoIterator<Item = impl Into<GroupIdentifier>>,
    ) -> Self {
        self.groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `MacAddress` member.
    #[must_use]
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    /// Sets the `MacAddress` member, replacing any previous value.
    pub fn set_mac_address(&mut self, mac_address: Option<String>) {
        self.mac_address = mac_address;
    }

    /// Sets the `MacAddress` member and returns the updated value.
    #[must_use]
    pub fn with_mac_address(mut self, mac_address: impl Into<String>) -> Self {
        self.mac_address = Some(mac_address.into());
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

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `PrivateDnsName` member.
    #[must_use]
    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// Sets the `PrivateDnsName` member, replacing any previous value.
    pub fn set_private_dns_name(&mut self, private_dns_name: Option<String>) {
        self.private_dns_name = private_dns_name;
    }

    /// Sets the `PrivateDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: impl Into<String>) -> Self {
        self.private_dns_name = Some(private_dns_name.into());
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

    /// Returns the `PrivateIpAddresses` member.
    #[must_use]
    pub fn private_ip_addresses(&self) -> Option<&[InstancePrivateIpAddress]> {
        self.private_ip_addresses.as_deref()
    }

    /// Sets the `PrivateIpAddresses` member, replacing any previous value.
    pub fn set_private_ip_addresses(
        &mut self,
        private_ip_addresses: Option<Vec<InstancePrivateIpAddress>>,
    ) {
        self.private_ip_addresses = private_ip_addresses;
    }

    /// Appends to the `PrivateIpAddresses` member and returns the updated value.
    #[must_use]
    pub fn with_private_ip_addresses(
        mut self,
        private_ip_addresses: impl IntoIterator<Item = impl Into<InstancePrivateIpAddress>>,
    ) -> Self {
        self.private_ip_addresses
            .get_or_insert_with(Vec::new)
            .extend(private_ip_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `SourceDestCheck` member.
    #[must_use]
    pub fn source_dest_check(&self) -> Option<bool> {
        self.source_dest_check
    }

    /// Sets the `SourceDestCheck` member, replacing any previous value.
    pub fn set_source_dest_check(&mut self, source_dest_check: Option<bool>) {
        self.source_dest_check = source_dest_check;
    }

    /// Sets the `SourceDestCheck` member and returns the updated value.
    #[must_use]
    pub fn with_source_dest_check(mut self, source_dest_check: impl Into<bool>) -> Self {
        self.source_dest_check = Some(source_dest_check.into());
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&NetworkInterfaceStatus> {
        self.status.as_ref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<NetworkInterfaceStatus>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<NetworkInterfaceStatus>) -> Self {
        self.status = Some(status.into());
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

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }

    /// Returns the `InterfaceType` member.
    #[must_use]
    pub fn interface_type(&self) -> Option<&str> {
        self.interface_type.as_deref()
    }

    /// Sets the `InterfaceType` member, replacing any previous value.
    pub fn set_interface_type(&mut self, interface_type: Option<String>) {
        self.interface_type = interface_type;
    }

    /// Sets the `InterfaceType` member and returns the updated value.
    #[must_use]
    pub fn with_interface_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }
}

impl Shape for InstanceNetworkInterface {
    const SHAPE_NAME: &'static str = "InstanceNetworkInterface";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Association", false, self.association.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("Groups", false, self.groups.as_ref()),
            Member::new("MacAddress", false, self.mac_address.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("PrivateDnsName", false, self.private_dns_name.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("PrivateIpAddresses", false, self.private_ip_addresses.as_ref()),
            Member::new("SourceDestCheck", false, self.source_dest_check.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
            Member::new("InterfaceType", false, self.interface_type.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceNetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceNetworkInterfaceAssociation.
///
/// Describes association information for an Elastic IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceNetworkInterfaceAssociation {
    #[serde(rename = "IpOwnerId", skip_serializing_if = "Option::is_none")]
    pub ip_owner_id: Option<String>,
    #[serde(rename = "PublicDnsName", skip_serializing_if = "Option::is_none")]
    pub public_dns_name: Option<String>,
    #[serde(rename = "PublicIp", skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

impl InstanceNetworkInterfaceAssociation {
    /// Returns the `IpOwnerId` member.
    #[must_use]
    pub fn ip_owner_id(&self) -> Option<&str> {
        self.ip_owner_id.as_deref()
    }

    /// Sets the `IpOwnerId` member, replacing any previous value.
    pub fn set_ip_owner_id(&mut self, ip_owner_id: Option<String>) {
        self.ip_owner_id = ip_owner_id;
    }

    /// Sets the `IpOwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_ip_owner_id(mut self, ip_owner_id: impl Into<String>) -> Self {
        self.ip_owner_id = Some(ip_owner_id.into());
        self
    }

    /// Returns the `PublicDnsName` member.
    #[must_use]
    pub fn public_dns_name(&self) -> Option<&str> {
        self.public_dns_name.as_deref()
    }

    /// Sets the `PublicDnsName` member, replacing any previous value.
    pub fn set_public_dns_name(&mut self, public_dns_name: Option<String>) {
        self.public_dns_name = public_dns_name;
    }

    /// Sets the `PublicDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_public_dns_name(mut self, public_dns_name: impl Into<String>) -> Self {
        self.public_dns_name = Some(public_dns_name.into());
        self
    }

    /// Returns the `PublicIp` member.
    #[must_use]
    pub fn public_ip(&self) -> Option<&str> {
        self.public_ip.as_deref()
    }

    /// Sets the `PublicIp` member, replacing any previous value.
    pub fn set_public_ip(&mut self, public_ip: Option<String>) {
        self.public_ip = public_ip;
    }

    /// Sets the `PublicIp` member and returns the updated value.
    #[must_use]
    pub fn with_public_ip(mut self, public_ip: impl Into<String>) -> Self {
        self.public_ip = Some(public_ip.into());
        self
    }
}

impl Shape for InstanceNetworkInterfaceAssociation {
    const SHAPE_NAME: &'static str = "InstanceNetworkInterfaceAssociation";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("IpOwnerId", false, self.ip_owner_id.as_ref()),
            Member::new("PublicDnsName", false, self.public_dns_name.as_ref()),
            Member::new("PublicIp", false, self.public_ip.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceNetworkInterfaceAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceNetworkInterfaceSpecification.
///
/// Describes a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceNetworkInterfaceSpecification {
    #[serde(rename = "AssociatePublicIpAddress", skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The position of the network interface in the attachment order.
    #[serde(rename = "DeviceIndex", skip_serializing_if = "Option::is_none")]
    pub device_index: Option<i32>,
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(rename = "Ipv6AddressCount", skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<i32>,
    #[serde(rename = "Ipv6Addresses", skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<InstanceIpv6Address>>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "PrivateIpAddresses", skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    #[serde(rename = "SecondaryPrivateIpAddressCount", skip_serializing_if = "Option::is_none")]
    pub secondary_private_ip_address_count: Option<i32>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "InterfaceType", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
}

impl InstanceNetworkInterfaceSpecification {
    /// Returns the `AssociatePublicIpAddress` member.
    #[must_use]
    pub fn associate_public_ip_address(&self) -> Option<bool> {
        self.associate_public_ip_address
    }

    /// Sets the `AssociatePublicIpAddress` member, replacing any previous value.
    pub fn set_associate_public_ip_address(&mut self, associate_public_ip_address: Option<bool>) {
        self.associate_public_ip_address = associate_public_ip_address;
    }

    /// Sets the `AssociatePublicIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_associate_public_ip_address(
        mut self,
        associate_public_ip_address: impl Into<bool>,
    ) -> Self {
        self.associate_public_ip_address = Some(associate_public_ip_address.into());
        self
    }

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
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

    /// Returns the `DeviceIndex` member.
    #[must_use]
    pub fn device_index(&self) -> Option<i32> {
        self.device_index
    }

    /// Sets the `DeviceIndex` member, replacing any previous value.
    pub fn set_device_index(&mut self, device_index: Option<i32>) {
        self.device_index = device_index;
    }

    /// Sets the `DeviceIndex` member and returns the updated value.
    #[must_use]
    pub fn with_device_index(mut self, device_index: impl Into<i32>) -> Self {
        self.device_index = Some(device_index.into());
        self
    }

    /// Returns the `Groups` member.
    #[must_use]
    pub fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    /// Sets the `Groups` member, replacing any previous value.
    pub fn set_groups(&mut self, groups: Option<Vec<String>>) {
        self.groups = groups;
    }

    /// Appends to the `Groups` member and returns the updated value.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
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

    /// Returns the `PrivateIpAddresses` member.
    #[must_use]
    pub fn private_ip_addresses(&self) -> Option<&[PrivateIpAddressSpecification]> {
        self.private_ip_addresses.as_deref()
    }

    /// Sets the `PrivateIpAddresses` member, replacing any previous value.
    pub fn set_private_ip_addresses(
        &mut self,
        private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    ) {
        self.private_ip_addresses = private_ip_addresses;
    }

    /// Appends to the `PrivateIpAddresses` member and returns the updated value.
    #[must_use]
    pub fn with_private_ip_addresses(
        mut self,
        private_ip_addresses: impl IntoIterator<Item = impl Into<PrivateIpAddressSpecification>>,
    ) -> Self {
        self.private_ip_addresses
            .get_or_insert_with(Vec::new)
            .extend(private_ip_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `SecondaryPrivateIpAddressCount` member.
    #[must_use]
    pub fn secondary_private_ip_address_count(&self) -> Option<i32> {
        self.secondary_private_ip_address_count
    }

    /// Sets the `SecondaryPrivateIpAddressCount` member, replacing any previous value.
    pub fn set_secondary_private_ip_address_count(
        &mut self,
        secondary_private_ip_address_count: Option<i32>,
    ) {
        self.secondary_private_ip_address_count = secondary_private_ip_address_count;
    }

    /// Sets the `SecondaryPrivateIpAddressCount` member and returns the updated value.
    #[must_use]
    pub fn with_secondary_private_ip_address_count(
        mut self,
        secondary_private_ip_address_count: impl Into<i32>,
    ) -> Self {
        self.secondary_private_ip_address_count = Some(secondary_private_ip_address_count.into());
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

    /// Returns the `InterfaceType` member.
    #[must_use]
    pub fn interface_type(&self) -> Option<&str> {
        self.interface_type.as_deref()
    }

    /// Sets the `InterfaceType` member, replacing any previous value.
    pub fn set_interface_type(&mut self, interface_type: Option<String>) {
        self.interface_type = interface_type;
    }

    /// Sets the `InterfaceType` member and returns the updated value.
    #[must_use]
    pub fn with_interface_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }
}

impl Shape for InstanceNetworkInterfaceSpecification {
    const SHAPE_NAME: &'static str = "InstanceNetworkInterfaceSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "AssociatePublicIpAddress",
                false,
                self.associate_public_ip_address.as_ref(),
            ),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("DeviceIndex", false, self.device_index.as_ref()),
            Member::new("Groups", false, self.groups.as_ref()),
            Member::new("Ipv6AddressCount", false, self.ipv6_address_count.as_ref()),
            Member::new("Ipv6Addresses", false, self.ipv6_addresses.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("PrivateIpAddresses", false, self.private_ip_addresses.as_ref()),
            Member::new(
                "SecondaryPrivateIpAddressCount",
                false,
                self.secondary_private_ip_address_count.as_ref(),
            ),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("InterfaceType", false, self.interface_type.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceNetworkInterfaceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstancePrivateIpAddress.
///
/// Describes a private IPv4 address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstancePrivateIpAddress {
    #[serde(rename = "Association", skip_serializing_if = "Option::is_none")]
    pub association: Option<InstanceNetworkInterfaceAssociation>,
    #[serde(rename = "Primary", skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

impl InstancePrivateIpAddress {
    /// Returns the `Association` member.
    #[must_use]
    pub fn association(&self) -> Option<&InstanceNetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// Sets the `Association` member, replacing any previous value.
    pub fn set_association(&mut self, association: Option<InstanceNetworkInterfaceAssociation>) {
        self.association = association;
    }

    /// Sets the `Association` member and returns the updated value.
    #[must_use]
    pub fn with_association(
        mut self,
        association: impl Into<InstanceNetworkInterfaceAssociation>,
    ) -> Self {
        self.association = Some(association.into());
        self
    }

    /// Returns the `Primary` member.
    #[must_use]
    pub fn primary(&self) -> Option<bool> {
        self.primary
    }

    /// Sets the `Primary` member, replacing any previous value.
    pub fn set_primary(&mut self, primary: Option<bool>) {
        self.primary = primary;
    }

    /// Sets the `Primary` member and returns the updated value.
    #[must_use]
    pub fn with_primary(mut self, primary: impl Into<bool>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    /// Returns the `PrivateDnsName` member.
    #[must_use]
    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// Sets the `PrivateDnsName` member, replacing any previous value.
    pub fn set_private_dns_name(&mut self, private_dns_name: Option<String>) {
        self.private_dns_name = private_dns_name;
    }

    /// Sets the `PrivateDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: impl Into<String>) -> Self {
        self.private_dns_name = Some(private_dns_name.into());
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
}

impl Shape for InstancePrivateIpAddress {
    const SHAPE_NAME: &'static str = "InstancePrivateIpAddress";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Association", false, self.association.as_ref()),
            Member::new("Primary", false, self.primary.as_ref()),
            Member::new("PrivateDnsName", false, self.private_dns_name.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
        ]
    }
}

impl fmt::Display for InstancePrivateIpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceState.
///
/// Describes the current state of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceState {
    /// The state of the instance as a 16-bit unsigned integer.
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    /// The current state of the instance.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<InstanceStateName>,
}

impl InstanceState {
    /// Returns the `Code` member.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Sets the `Code` member, replacing any previous value.
    pub fn set_code(&mut self, code: Option<i32>) {
        self.code = code;
    }

    /// Sets the `Code` member and returns the updated value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<i32>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&InstanceStateName> {
        self.name.as_ref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<InstanceStateName>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<InstanceStateName>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Shape for InstanceState {
    const SHAPE_NAME: &'static str = "InstanceState";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Code", false, self.code.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceStorageInfo.
///
/// Describes the disks that are available for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceStorageInfo {
    #[serde(rename = "TotalSizeInGB", skip_serializing_if = "Option::is_none")]
    pub total_size_in_gb: Option<i64>,
    #[serde(rename = "Disks", skip_serializing_if = "Option::is_none")]
    pub disks: Option<Vec<DiskInfo>>,
}

impl InstanceStorageInfo {
    /// Returns the `TotalSizeInGB` member.
    #[must_use]
    pub fn total_size_in_gb(&self) -> Option<i64> {
        self.total_size_in_gb
    }

    /// Sets the `TotalSizeInGB` member, replacing any previous value.
    pub fn set_total_size_in_gb(&mut self, total_size_in_gb: Option<i64>) {
        self.total_size_in_gb = total_size_in_gb;
    }

    /// Sets the `TotalSizeInGB` member and returns the updated value.
    #[must_use]
    pub fn with_total_size_in_gb(mut self, total_size_in_gb: impl Into<i64>) -> Self {
        self.total_size_in_gb = Some(total_size_in_gb.into());
        self
    }

    /// Returns the `Disks` member.
    #[must_use]
    pub fn disks(&self) -> Option<&[DiskInfo]> {
        self.disks.as_deref()
    }

    /// Sets the `Disks` member, replacing any previous value.
    pub fn set_disks(&mut self, disks: Option<Vec<DiskInfo>>) {
        self.disks = disks;
    }

    /// Appends to the `Disks` member and returns the updated value.
    #[must_use]
    pub fn with_disks(mut self, disks: impl IntoIterator<Item = impl Into<DiskInfo>>) -> Self {
        self.disks
            .get_or_insert_with(Vec::new)
            .extend(disks.into_iter().map(Into::into));
        self
    }
}

impl Shape for InstanceStorageInfo {
    const SHAPE_NAME: &'static str = "InstanceStorageInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("TotalSizeInGB", false, self.total_size_in_gb.as_ref()),
            Member::new("Disks", false, self.disks.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceStorageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InstanceTypeInfo.
///
/// Describes the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceTypeInfo {
    /// The instance type.
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "CurrentGeneration", skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(rename = "FreeTierEligible", skip_serializing_if = "Option::is_none")]
    pub free_tier_eligible: Option<bool>,
    #[serde(rename = "SupportedUsageClasses", skip_serializing_if = "Option::is_none")]
    pub supported_usage_classes: Option<Vec<UsageClassType>>,
    #[serde(rename = "SupportedRootDeviceTypes", skip_serializing_if = "Option::is_none")]
    pub supported_root_device_types: Option<Vec<RootDeviceType>>,
    #[serde(rename = "SupportedVirtualizationTypes", skip_serializing_if = "Option::is_none")]
    pub supported_virtualization_types: Option<Vec<VirtualizationType>>,
    #[serde(rename = "BareMetal", skip_serializing_if = "Option::is_none")]
    pub bare_metal: Option<bool>,
    /// The hypervisor for the instance type.
    #[serde(rename = "Hypervisor", skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<InstanceTypeHypervisor>,
    #[serde(rename = "ProcessorInfo", skip_serializing_if = "Option::is_none")]
    pub processor_info: Option<ProcessorInfo>,
    #[serde(rename = "VCpuInfo", skip_serializing_if = "Option::is_none")]
    pub v_cpu_info: Option<VCpuInfo>,
    #[serde(rename = "MemoryInfo", skip_serializing_if = "Option::is_none")]
    pub memory_info: Option<MemoryInfo>,
    #[serde(rename = "InstanceStorageSupported", skip_serializing_if = "Option::is_none")]
    pub instance_storage_supported: Option<bool>,
    #[serde(rename = "InstanceStorageInfo", skip_serializing_if = "Option::is_none")]
    pub instance_storage_info: Option<InstanceStorageInfo>,
    #[serde(rename = "EbsInfo", skip_serializing_if = "Option::is_none")]
    pub ebs_info: Option<EbsInfo>,
    #[serde(rename = "NetworkInfo", skip_serializing_if = "Option::is_none")]
    pub network_info: Option<NetworkInfo>,
    #[serde(rename = "GpuInfo", skip_serializing_if = "Option::is_none")]
    pub gpu_info: Option<GpuInfo>,
    #[serde(rename = "FpgaInfo", skip_serializing_if = "Option::is_none")]
    pub fpga_info: Option<FpgaInfo>,
    #[serde(rename = "PlacementGroupInfo", skip_serializing_if = "Option::is_none")]
    pub placement_group_info: Option<PlacementGroupInfo>,
    #[serde(rename = "InferenceAcceleratorInfo", skip_serializing_if = "Option::is_none")]
    pub inference_accelerator_info: Option<InferenceAcceleratorInfo>,
    #[serde(rename = "HibernationSupported", skip_serializing_if = "Option::is_none")]
    pub hibernation_supported: Option<bool>,
    #[serde(rename = "BurstablePerformanceSupported", skip_serializing_if = "Option::is_none")]
    pub burstable_performance_supported: Option<bool>,
    #[serde(rename = "DedicatedHostsSupported", skip_serializing_if = "Option::is_none")]
    pub dedicated_hosts_supported: Option<bool>,
    #[serde(rename = "AutoRecoverySupported", skip_serializing_if = "Option::is_none")]
    pub auto_recovery_supported: Option<bool>,
}

impl InstanceTypeInfo {
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

    /// Returns the `CurrentGeneration` member.
    #[must_use]
    pub fn current_generation(&self) -> Option<bool> {
        self.current_generation
    }

    /// Sets the `CurrentGeneration` member, replacing any previous value.
    pub fn set_current_generation(&mut self, current_generation: Option<bool>) {
        self.current_generation = current_generation;
    }

    /// Sets the `CurrentGeneration` member and returns the updated value.
    #[must_use]
    pub fn with_current_generation(mut self, current_generation: impl Into<bool>) -> Self {
        self.current_generation = Some(current_generation.into());
        self
    }

    /// Returns the `FreeTierEligible` member.
    #[must_use]
    pub fn free_tier_eligible(&self) -> Option<bool> {
        self.free_tier_eligible
    }

    /// Sets the `FreeTierEligible` member, replacing any previous value.
    pub fn set_free_tier_eligible(&mut self, free_tier_eligible: Option<bool>) {
        self.free_tier_eligible = free_tier_eligible;
    }

    /// Sets the `FreeTierEligible` member and returns the updated value.
    #[must_use]
    pub fn with_free_tier_eligible(mut self, free_tier_eligible: impl Into<bool>) -> Self {
        self.free_tier_eligible = Some(free_tier_eligible.into());
        self
    }

    /// Returns the `SupportedUsageClasses` member.
    #[must_use]
    pub fn supported_usage_classes(&self) -> Option<&[UsageClassType]> {
        self.supported_usage_classes.as_deref()
    }

    /// Sets the `SupportedUsageClasses` member, replacing any previous value.
    pub fn set_supported_usage_classes(
        &mut self,
        supported_usage_classes: Option<Vec<UsageClassType>>,
    ) {
        self.supported_usage_classes = supported_usage_classes;
    }

    /// Appends to the `SupportedUsageClasses` member and returns the updated value.
    #[must_use]
    pub fn with_supported_usage_classes(
        mut self,
        supported_usage_classes: impl IntoIterator<Item = impl Into<UsageClassType>>,
    ) -> Self {
        self.supported_usage_classes
            .get_or_insert_with(Vec::new)
            .extend(supported_usage_classes.into_iter().map(Into::into));
        self
    }

    /// Returns the `SupportedRootDeviceTypes` member.
    #[must_use]
    pub fn supported_root_device_types(&self) -> Option<&[RootDeviceType]> {
        self.supported_root_device_types.as_deref()
    }

    /// Sets the `SupportedRootDeviceTypes` member, replacing any previous value.
    pub fn set_supported_root_device_types(
        &mut self,
        supported_root_device_types: Option<Vec<RootDeviceType>>,
    ) {
        self.supported_root_device_types = supported_root_device_types;
    }

    /// Appends to the `SupportedRootDeviceTypes` member and returns the updated value.
    #[must_use]
    pub fn with_supported_root_device_types(
        mut self,
        supported_root_device_types: impl IntoIterator<Item = impl Into<RootDeviceType>>,
    ) -> Self {
        self.supported_root_device_types
            .get_or_insert_with(Vec::new)
            .extend(supported_root_device_types.into_iter().map(Into::into));
        self
    }

    /// Returns the `SupportedVirtualizationTypes` member.
    #[must_use]
    pub fn supported_virtualization_types(&self) -> Option<&[VirtualizationType]> {
        self.supported_virtualization_types.as_deref()
    }

    /// Sets the `SupportedVirtualizationTypes` member, replacing any previous value.
    pub fn set_supported_virtualization_types(
        &mut self,
        supported_virtualization_types: Option<Vec<VirtualizationType>>,
    ) {
        self.supported_virtualization_types = supported_virtualization_types;
    }

    /// Appends to the `SupportedVirtualizationTypes` member and returns the updated value.
    #[must_use]
    pub fn with_supported_virtualization_types(
        mut self,
        supported_virtualization_types: impl IntoIterator<Item = impl Into<VirtualizationType>>,
    ) -> Self {
        self.supported_virtualization_types
            .get_or_insert_with(Vec::new)
            .extend(supported_virtualization_types.into_iter().map(Into::into));
        self
    }

    /// Returns the `BareMetal` member.
    #[must_use]
    pub fn bare_metal(&self) -> Option<bool> {
        self.bare_metal
    }

    /// Sets the `BareMetal` member, replacing any previous value.
    pub fn set_bare_metal(&mut self, bare_metal: Option<bool>) {
        self.bare_metal = bare_metal;
    }

    /// Sets the `BareMetal` member and returns the updated value.
    #[must_use]
    pub fn with_bare_metal(mut self, bare_metal: impl Into<bool>) -> Self {
        self.bare_metal = Some(bare_metal.into());
        self
    }

    /// Returns the `Hypervisor` member.
    #[must_use]
    pub fn hypervisor(&self) -> Option<&InstanceTypeHypervisor> {
        self.hypervisor.as_ref()
    }

    /// Sets the `Hypervisor` member, replacing any previous value.
    pub fn set_hypervisor(&mut self, hypervisor: Option<InstanceTypeHypervisor>) {
        self.hypervisor = hypervisor;
    }

    /// Sets the `Hypervisor` member and returns the updated value.
    #[must_use]
    pub fn with_hypervisor(mut self, hypervisor: impl Into<InstanceTypeHypervisor>) -> Self {
        self.hypervisor = Some(hypervisor.into());
        self
    }

    /// Returns the `ProcessorInfo` member.
    #[must_use]
    pub fn processor_info(&self) -> Option<&ProcessorInfo> {
        self.processor_info.as_ref()
    }

    /// Sets the `ProcessorInfo` member, replacing any previous value.
    pub fn set_processor_info(&mut self, processor_info: Option<ProcessorInfo>) {
        self.processor_info = processor_info;
    }

    /// Sets the `ProcessorInfo` member and returns the updated value.
    #[must_use]
    pub fn with_processor_info(mut self, processor_info: impl Into<ProcessorInfo>) -> Self {
        self.processor_info = Some(processor_info.into());
        self
    }

    /// Returns the `VCpuInfo` member.
    #[must_use]
    pub fn v_cpu_info(&self) -> Option<&VCpuInfo> {
        self.v_cpu_info.as_ref()
    }

    /// Sets the `VCpuInfo` member, replacing any previous value.
    pub fn set_v_cpu_info(&mut self, v_cpu_info: Option<VCpuInfo>) {
        self.v_cpu_info = v_cpu_info;
    }

    /// Sets the `VCpuInfo` member and returns the updated value.
    #[must_use]
    pub fn with_v_cpu_info(mut self, v_cpu_info: impl Into<VCpuInfo>) -> Self {
        self.v_cpu_info = Some(v_cpu_info.into());
        self
    }

    /// Returns the `MemoryInfo` member.
    #[must_use]
    pub fn memory_info(&self) -> Option<&MemoryInfo> {
        self.memory_info.as_ref()
    }

    /// Sets the `MemoryInfo` member, replacing any previous value.
    pub fn set_memory_info(&mut self, memory_info: Option<MemoryInfo>) {
        self.memory_info = memory_info;
    }

    /// Sets the `MemoryInfo` member and returns the updated value.
    #[must_use]
    pub fn with_memory_info(mut self, memory_info: impl Into<MemoryInfo>) -> Self {
        self.memory_info = Some(memory_info.into());
        self
    }

    /// Returns the `InstanceStorageSupported` member.
    #[must_use]
    pub fn instance_storage_supported(&self) -> Option<bool> {
        self.instance_storage_supported
    }

    /// Sets the `InstanceStorageSupported` member, replacing any previous value.
    pub fn set_instance_storage_supported(&mut self, instance_storage_supported: Option<bool>) {
        self.instance_storage_supported = instance_storage_supported;
    }

    /// Sets the `InstanceStorageSupported` member and returns the updated value.
    #[must_use]
    pub fn with_instance_storage_supported(
        mut self,
        instance_storage_supported: impl Into<bool>,
    ) -> Self {
        self.instance_storage_supported = Some(instance_storage_supported.into());
        self
    }

    /// Returns the `InstanceStorageInfo` member.
    #[must_use]
    pub fn instance_storage_info(&self) -> Option<&InstanceStorageInfo> {
        self.instance_storage_info.as_ref()
    }

    /// Sets the `InstanceStorageInfo` member, replacing any previous value.
    pub fn set_instance_storage_info(
        &mut self,
        instance_storage_info: Option<InstanceStorageInfo>,
    ) {
        self.instance_storage_info = instance_storage_info;
    }

    /// Sets the `InstanceStorageInfo` member and returns the updated value.
    #[must_use]
    pub fn with_instance_storage_info(
        mut self,
        instance_storage_info: impl Into<InstanceStorageInfo>,
    ) -> Self {
        self.instance_storage_info = Some(instance_storage_info.into());
        self
    }

    /// Returns the `EbsInfo` member.
    #[must_use]
    pub fn ebs_info(&self) -> Option<&EbsInfo> {
        self.ebs_info.as_ref()
    }

    /// Sets the `EbsInfo` member, replacing any previous value.
    pub fn set_ebs_info(&mut self, ebs_info: Option<EbsInfo>) {
        self.ebs_info = ebs_info;
    }

    /// Sets the `EbsInfo` member and returns the updated value.
    #[must_use]
    pub fn with_ebs_info(mut self, ebs_info: impl Into<EbsInfo>) -> Self {
        self.ebs_info = Some(ebs_info.into());
        self
    }

    /// Returns the `NetworkInfo` member.
    #[must_use]
    pub fn network_info(&self) -> Option<&NetworkInfo> {
        self.network_info.as_ref()
    }

    /// Sets the `NetworkInfo` member, replacing any previous value.
    pub fn set_network_info(&mut self, network_info: Option<NetworkInfo>) {
        self.network_info = network_info;
    }

    /// Sets the `NetworkInfo` member and returns the updated value.
    #[must_use]
    pub fn with_network_info(mut self, network_info: impl Into<NetworkInfo>) -> Self {
        self.network_info = Some(network_info.into());
        self
    }

    /// Returns the `GpuInfo` member.
    #[must_use]
    pub fn gpu_info(&self) -> Option<&GpuInfo> {
        self.gpu_info.as_ref()
    }

    /// Sets the `GpuInfo` member, replacing any previous value.
    pub fn set_gpu_info(&mut self, gpu_info: Option<GpuInfo>) {
        self.gpu_info = gpu_info;
    }

    /// Sets the `GpuInfo` member and returns the updated value.
    #[must_use]
    pub fn with_gpu_info(mut self, gpu_info: impl Into<GpuInfo>) -> Self {
        self.gpu_info = Some(gpu_info.into());
        self
    }

    /// Returns the `FpgaInfo` member.
    #[must_use]
    pub fn fpga_info(&self) -> Option<&FpgaInfo> {
        self.fpga_info.as_ref()
    }

    /// Sets the `FpgaInfo` member, replacing any previous value.
    pub fn set_fpga_info(&mut self, fpga_info: Option<FpgaInfo>) {
        self.fpga_info = fpga_info;
    }

    /// Sets the `FpgaInfo` member and returns the updated value.
    #[must_use]
    pub fn with_fpga_info(mut self, fpga_info: impl Into<FpgaInfo>) -> Self {
        self.fpga_info = Some(fpga_info.into());
        self
    }

    /// Returns the `PlacementGroupInfo` member.
    #[must_use]
    pub fn placement_group_info(&self) -> Option<&PlacementGroupInfo> {
        self.placement_group_info.as_ref()
    }

    /// Sets the `PlacementGroupInfo` member, replacing any previous value.
    pub fn set_placement_group_info(&mut self, placement_group_info: Option<PlacementGroupInfo>) {
        self.placement_group_info = placement_group_info;
    }

    /// Sets the `PlacementGroupInfo` member and returns the updated value.
    #[must_use]
    pub fn with_placement_group_info(
        mut self,
        placement_group_info: impl Into<PlacementGroupInfo>,
    ) -> Self {
        self.placement_group_info = Some(placement_group_info.into());
        self
    }

    /// Returns the `InferenceAcceleratorInfo` member.
    #[must_use]
    pub fn inference_accelerator_info(&self) -> Option<&InferenceAcceleratorInfo> {
        self.inference_accelerator_info.as_ref()
    }

    /// Sets the `InferenceAcceleratorInfo` member, replacing any previous value.
    pub fn set_inference_accelerator_info(
        &mut self,
        inference_accelerator_info: Option<InferenceAcceleratorInfo>,
    ) {
        self.inference_accelerator_info = inference_accelerator_info;
    }

    /// Sets the `InferenceAcceleratorInfo` member and returns the updated value.
    #[must_use]
    pub fn with_inference_accelerator_info(
        mut self,
        inference_accelerator_info: impl Into<InferenceAcceleratorInfo>,
    ) -> Self {
        self.inference_accelerator_info = Some(inference_accelerator_info.into());
        self
    }

    /// Returns the `HibernationSupported` member.
    #[must_use]
    pub fn hibernation_supported(&self) -> Option<bool> {
        self.hibernation_supported
    }

    /// Sets the `HibernationSupported` member, replacing any previous value.
    pub fn set_hibernation_supported(&mut self, hibernation_supported: Option<bool>) {
        self.hibernation_supported = hibernation_supported;
    }

    /// Sets the `HibernationSupported` member and returns the updated value.
    #[must_use]
    pub fn with_hibernation_supported(mut self, hibernation_supported: impl Into<bool>) -> Self {
        self.hibernation_supported = Some(hibernation_supported.into());
        self
    }

    /// Returns the `BurstablePerformanceSupported` member.
    #[must_use]
    pub fn burstable_performance_supported(&self) -> Option<bool> {
        self.burstable_performance_supported
    }

    /// Sets the `BurstablePerformanceSupported` member, replacing any previous value.
    pub fn set_burstable_performance_supported(
        &mut self,
        burstable_performance_supported: Option<bool>,
    ) {
        self.burstable_performance_supported = burstable_performance_supported;
    }

    /// Sets the `BurstablePerformanceSupported` member and returns the updated value.
    #[must_use]
    pub fn with_burstable_performance_supported(
        mut self,
        burstable_performance_supported: impl Into<bool>,
    ) -> Self {
        self.burstable_performance_supported = Some(burstable_performance_supported.into());
        self
    }

    /// Returns the `DedicatedHostsSupported` member.
    #[must_use]
    pub fn dedicated_hosts_supported(&self) -> Option<bool> {
        self.dedicated_hosts_supported
    }

    /// Sets the `DedicatedHostsSupported` member, replacing any previous value.
    pub fn set_dedicated_hosts_supported(&mut self, dedicated_hosts_supported: Option<bool>) {
        self.dedicated_hosts_supported = dedicated_hosts_supported;
    }

    /// Sets the `DedicatedHostsSupported` member and returns the updated value.
    #[must_use]
    pub fn with_dedicated_hosts_supported(
        mut self,
        dedicated_hosts_supported: impl Into<bool>,
    ) -> Self {
        self.dedicated_hosts_supported = Some(dedicated_hosts_supported.into());
        self
    }

    /// Returns the `AutoRecoverySupported` member.
    #[must_use]
    pub fn auto_recovery_supported(&self) -> Option<bool> {
        self.auto_recovery_supported
    }

    /// Sets the `AutoRecoverySupported` member, replacing any previous value.
    pub fn set_auto_recovery_supported(&mut self, auto_recovery_supported: Option<bool>) {
        self.auto_recovery_supported = auto_recovery_supported;
    }

    /// Sets the `AutoRecoverySupported` member and returns the updated value.
    #[must_use]
    pub fn with_auto_recovery_supported(
        mut self,
        auto_recovery_supported: impl Into<bool>,
    ) -> Self {
        self.auto_recovery_supported = Some(auto_recovery_supported.into());
        self
    }
}

impl Shape for InstanceTypeInfo {
    const SHAPE_NAME: &'static str = "InstanceTypeInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("CurrentGeneration", false, self.current_generation.as_ref()),
            Member::new("FreeTierEligible", false, self.free_tier_eligible.as_ref()),
            Member::new("SupportedUsageClasses", false, self.supported_usage_classes.as_ref()),
            Member::new(
                "SupportedRootDeviceTypes",
                false,
                self.supported_root_device_types.as_ref(),
            ),
            Member::new(
                "SupportedVirtualizationTypes",
                false,
                self.supported_virtualization_types.as_ref(),
            ),
            Member::new("BareMetal", false, self.bare_metal.as_ref()),
            Member::new("Hypervisor", false, self.hypervisor.as_ref()),
            Member::new("ProcessorInfo", false, self.processor_info.as_ref()),
            Member::new("VCpuInfo", false, self.v_cpu_info.as_ref()),
            Member::new("MemoryInfo", false, self.memory_info.as_ref()),
            Member::new(
                "InstanceStorageSupported",
                false,
                self.instance_storage_supported.as_ref(),
            ),
            Member::new("InstanceStorageInfo", false, self.instance_storage_info.as_ref()),
            Member::new("EbsInfo", false, self.ebs_info.as_ref()),
            Member::new("NetworkInfo", false, self.network_info.as_ref()),
            Member::new("GpuInfo", false, self.gpu_info.as_ref()),
            Member::new("FpgaInfo", false, self.fpga_info.as_ref()),
            Member::new("PlacementGroupInfo", false, self.placement_group_info.as_ref()),
            Member::new(
                "InferenceAcceleratorInfo",
                false,
                self.inference_accelerator_info.as_ref(),
            ),
            Member::new("HibernationSupported", false, self.hibernation_supported.as_ref()),
            Member::new(
                "BurstablePerformanceSupported",
                false,
                self.burstable_performance_supported.as_ref(),
            ),
            Member::new("DedicatedHostsSupported", false, self.dedicated_hosts_supported.as_ref()),
            Member::new("AutoRecoverySupported", false, self.auto_recovery_supported.as_ref()),
        ]
    }
}

impl fmt::Display for InstanceTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InternetGateway.
///
/// Describes an internet gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternetGateway {
    /// Any VPCs attached to the internet gateway.
    #[serde(rename = "Attachments", skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<InternetGatewayAttachment>>,
    #[serde(rename = "InternetGatewayId", skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl InternetGateway {
    /// Returns the `Attachments` member.
    #[must_use]
    pub fn attachments(&self) -> Option<&[InternetGatewayAttachment]> {
        self.attachments.as_deref()
    }

    /// Sets the `Attachments` member, replacing any previous value.
    pub fn set_attachments(&mut self, attachments: Option<Vec<InternetGatewayAttachment>>) {
        self.attachments = attachments;
    }

    /// Appends to the `Attachments` member and returns the updated value.
    #[must_use]
    pub fn with_attachments(
        mut self,
        attachments: impl IntoIterator<Item = impl Into<InternetGatewayAttachment>>,
    ) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .extend(attachments.into_iter().map(Into::into));
        self
    }

    /// Returns the `InternetGatewayId` member.
    #[must_use]
    pub fn internet_gateway_id(&self) -> Option<&str> {
        self.internet_gateway_id.as_deref()
    }

    /// Sets the `InternetGatewayId` member, replacing any previous value.
    pub fn set_internet_gateway_id(&mut self, internet_gateway_id: Option<String>) {
        self.internet_gateway_id = internet_gateway_id;
    }

    /// Sets the `InternetGatewayId` member and returns the updated value.
    #[must_use]
    pub fn with_internet_gateway_id(mut self, internet_gateway_id: impl Into<String>) -> Self {
        self.internet_gateway_id = Some(internet_gateway_id.into());
        self
    }

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
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

impl Shape for InternetGateway {
    const SHAPE_NAME: &'static str = "InternetGateway";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Attachments", false, self.attachments.as_ref()),
            Member::new("InternetGatewayId", false, self.internet_gateway_id.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for InternetGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 InternetGatewayAttachment.
///
/// Describes the attachment of a VPC to an internet gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternetGatewayAttachment {
    /// The current state of the attachment.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<AttachmentStatus>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

impl InternetGatewayAttachment {
    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&AttachmentStatus> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<AttachmentStatus>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<AttachmentStatus>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }
}

impl Shape for InternetGatewayAttachment {
    const SHAPE_NAME: &'static str = "InternetGatewayAttachment";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("State", false, self.state.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
        ]
    }
}

impl fmt::Display for InternetGatewayAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 IpPermission.
///
/// Describes a set of permissions for a security group rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpPermission {
    /// The start of the port range, or the ICMP type number.
    #[serde(rename = "FromPort", skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    /// The IP protocol name or number.
    #[serde(rename = "IpProtocol", skip_serializing_if = "Option::is_none")]
    pub ip_protocol: Option<String>,
    #[serde(rename = "IpRanges", skip_serializing_if = "Option::is_none")]
    pub ip_ranges: Option<Vec<IpRange>>,
    #[serde(rename = "Ipv6Ranges", skip_serializing_if = "Option::is_none")]
    pub ipv6_ranges: Option<Vec<Ipv6Range>>,
    #[serde(rename = "PrefixListIds", skip_serializing_if = "Option::is_none")]
    pub prefix_list_ids: Option<Vec<PrefixListId>>,
    /// The end of the port range, or the ICMP code.
    #[serde(rename = "ToPort", skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(rename = "UserIdGroupPairs", skip_serializing_if = "Option::is_none")]
    pub user_id_group_pairs: Option<Vec<UserIdGroupPair>>,
}

impl IpPermission {
    /// Returns the `FromPort` member.
    #[must_use]
    pub fn from_port(&self) -> Option<i32> {
        self.from_port
    }

    /// Sets the `FromPort` member, replacing any previous value.
    pub fn set_from_port(&mut self, from_port: Option<i32>) {
        self.from_port = from_port;
    }

    /// Sets the `FromPort` member and returns the updated value.
    #[must_use]
    pub fn with_from_port(mut self, from_port: impl Into<i32>) -> Self {
        self.from_port = Some(from_port.into());
        self
    }

    /// Returns the `IpProtocol` member.
    #[must_use]
    pub fn ip_protocol(&self) -> Option<&str> {
        self.ip_protocol.as_deref()
    }

    /// Sets the `IpProtocol` member, replacing any previous value.
    pub fn set_ip_protocol(&mut self, ip_protocol: Option<String>) {
        self.ip_protocol = ip_protocol;
    }

    /// Sets the `IpProtocol` member and returns the updated value.
    #[must_use]
    pub fn with_ip_protocol(mut self, ip_protocol: impl Into<String>) -> Self {
        self.ip_protocol = Some(ip_protocol.into());
        self
    }

    /// Returns the `IpRanges` member.
    #[must_use]
    pub fn ip_ranges(&self) -> Option<&[IpRange]> {
        self.ip_ranges.as_deref()
    }

    /// Sets the `IpRanges` member, replacing any previous value.
    pub fn set_ip_ranges(&mut self, ip_ranges: Option<Vec<IpRange>>) {
        self.ip_ranges = ip_ranges;
    }

    /// Appends to the `IpRanges` member and returns the updated value.
    #[must_use]
    pub fn with_ip_ranges(
        mut self,
        ip_ranges: impl IntoIterator<Item = impl Into<IpRange>>,
    ) -> Self {
        self.ip_ranges
            .get_or_insert_with(Vec::new)
            .extend(ip_ranges.into_iter().map(Into::into));
        self
    }

    /// Returns the `Ipv6Ranges` member.
    #[must_use]
    pub fn ipv6_ranges(&self) -> Option<&[Ipv6Range]> {
        self.ipv6_ranges.as_deref()
    }

    /// Sets the `Ipv6Ranges` member, replacing any previous value.
    pub fn set_ipv6_ranges(&mut self, ipv6_ranges: Option<Vec<Ipv6Range>>) {
        self.ipv6_ranges = ipv6_ranges;
    }

    /// Appends to the `Ipv6Ranges` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_ranges(
        mut self,
        ipv6_ranges: impl IntoIterator<Item = impl Into<Ipv6Range>>,
    ) -> Self {
        self.ipv6_ranges
            .get_or_insert_with(Vec::new)
            .extend(ipv6_ranges.into_iter().map(Into::into));
        self
    }

    /// Returns the `PrefixListIds` member.
    #[must_use]
    pub fn prefix_list_ids(&self) -> Option<&[PrefixListId]> {
        self.prefix_list_ids.as_deref()
    }

    /// Sets the `PrefixListIds` member, replacing any previous value.
    pub fn set_prefix_list_ids(&mut self, prefix_list_ids: Option<Vec<PrefixListId>>) {
        self.prefix_list_ids = prefix_list_ids;
    }

    /// Appends to the `PrefixListIds` member and returns the updated value.
    #[must_use]
    pub fn with_prefix_list_ids(
        mut self,
        prefix_list_ids: impl IntoIterator<Item = impl Into<PrefixListId>>,
    ) -> Self {
        self.prefix_list_ids
            .get_or_insert_with(Vec::new)
            .extend(prefix_list_ids.into_iter().map(Into::into));
        self
    }

    /// Returns the `ToPort` member.
    #[must_use]
    pub fn to_port(&self) -> Option<i32> {
        self.to_port
    }

    /// Sets the `ToPort` member, replacing any previous value.
    pub fn set_to_port(&mut self, to_port: Option<i32>) {
        self.to_port = to_port;
    }

    /// Sets the `ToPort` member and returns the updated value.
    #[must_use]
    pub fn with_to_port(mut self, to_port: impl Into<i32>) -> Self {
        self.to_port = Some(to_port.into());
        self
    }

    /// Returns the `UserIdGroupPairs` member.
    #[must_use]
    pub fn user_id_group_pairs(&self) -> Option<&[UserIdGroupPair]> {
        self.user_id_group_pairs.as_deref()
    }

    /// Sets the `UserIdGroupPairs` member, replacing any previous value.
    pub fn set_user_id_group_pairs(&mut self, user_id_group_pairs: Option<Vec<UserIdGroupPair>>) {
        self.user_id_group_pairs = user_id_group_pairs;
    }

    /// Appends to the `UserIdGroupPairs` member and returns the updated value.
    #[must_use]
    pub fn with_user_id_group_pairs(
        mut self,
        user_id_group_pairs: impl IntoIterator<Item = impl Into<UserIdGroupPair>>,
    ) -> Self {
        self.user_id_group_pairs
            .get_or_insert_with(Vec::new)
            .extend(user_id_group_pairs.into_iter().map(Into::into));
        self
    }
}

impl Shape for IpPermission {
    const SHAPE_NAME: &'static str = "IpPermission";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("FromPort", false, self.from_port.as_ref()),
            Member::new("IpProtocol", false, self.ip_protocol.as_ref()),
            Member::new("IpRanges", false, self.ip_ranges.as_ref()),
            Member::new("Ipv6Ranges", false, self.ipv6_ranges.as_ref()),
            Member::new("PrefixListIds", false, self.prefix_list_ids.as_ref()),
            Member::new("ToPort", false, self.to_port.as_ref()),
            Member::new("UserIdGroupPairs", false, self.user_id_group_pairs.as_ref()),
        ]
    }
}

impl fmt::Display for IpPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 IpRange.
///
/// Describes an IPv4 range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpRange {
    /// The IPv4 CIDR range.
    #[serde(rename = "CidrIp", skip_serializing_if = "Option::is_none")]
    pub cidr_ip: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IpRange {
    /// Returns the `CidrIp` member.
    #[must_use]
    pub fn cidr_ip(&self) -> Option<&str> {
        self.cidr_ip.as_deref()
    }

    /// Sets the `CidrIp` member, replacing any previous value.
    pub fn set_cidr_ip(&mut self, cidr_ip: Option<String>) {
        self.cidr_ip = cidr_ip;
    }

    /// Sets the `CidrIp` member and returns the updated value.
    #[must_use]
    pub fn with_cidr_ip(mut self, cidr_ip: impl Into<String>) -> Self {
        self.cidr_ip = Some(cidr_ip.into());
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
}

impl Shape for IpRange {
    const SHAPE_NAME: &'static str = "IpRange";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CidrIp", false, self.cidr_ip.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
        ]
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Ipv6Range.
///
/// Describes an IPv6 range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ipv6Range {
    /// The IPv6 CIDR range.
    #[serde(rename = "CidrIpv6", skip_serializing_if = "Option::is_none")]
    pub cidr_ipv6: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Ipv6Range {
    /// Returns the `CidrIpv6` member.
    #[must_use]
    pub fn cidr_ipv6(&self) -> Option<&str> {
        self.cidr_ipv6.as_deref()
    }

    /// Sets the `CidrIpv6` member, replacing any previous value.
    pub fn set_cidr_ipv6(&mut self, cidr_ipv6: Option<String>) {
        self.cidr_ipv6 = cidr_ipv6;
    }

    /// Sets the `CidrIpv6` member and returns the updated value.
    #[must_use]
    pub fn with_cidr_ipv6(mut self, cidr_ipv6: impl Into<String>) -> Self {
        self.cidr_ipv6 = Some(cidr_ipv6.into());
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
}

impl Shape for Ipv6Range {
    const SHAPE_NAME: &'static str = "Ipv6Range";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CidrIpv6", false, self.cidr_ipv6.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
        ]
    }
}

impl fmt::Display for Ipv6Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchSpecification.
///
/// Describes the launch specification for an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchSpecification {
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "AddressingType", skip_serializing_if = "Option::is_none")]
    pub addressing_type: Option<String>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfileSpecification>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<SpotPlacement>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<RunInstancesMonitoringEnabled>,
}

impl LaunchSpecification {
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

    /// Returns the `SecurityGroups` member.
    #[must_use]
    pub fn security_groups(&self) -> Option<&[GroupIdentifier]> {
        self.security_groups.as_deref()
    }

    /// Sets the `SecurityGroups` member, replacing any previous value.
    pub fn set_security_groups(&mut self, security_groups: Option<Vec<GroupIdentifier>>) {
        self.security_groups = security_groups;
    }

    /// Appends to the `SecurityGroups` member and returns the updated value.
    #[must_use]
    pub fn with_security_groups(
        mut self,
        security_groups: impl IntoIterator<Item = impl Into<GroupIdentifier>>,
    ) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `AddressingType` member.
    #[must_use]
    pub fn addressing_type(&self) -> Option<&str> {
        self.addressing_type.as_deref()
    }

    /// Sets the `AddressingType` member, replacing any previous value.
    pub fn set_addressing_type(&mut self, addressing_type: Option<String>) {
        self.addressing_type = addressing_type;
    }

    /// Sets the `AddressingType` member and returns the updated value.
    #[must_use]
    pub fn with_addressing_type(mut self, addressing_type: impl Into<String>) -> Self {
        self.addressing_type = Some(addressing_type.into());
        self
    }

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

    /// Returns the `Placement` member.
    #[must_use]
    pub fn placement(&self) -> Option<&SpotPlacement> {
        self.placement.as_ref()
    }

    /// Sets the `Placement` member, replacing any previous value.
    pub fn set_placement(&mut self, placement: Option<SpotPlacement>) {
        self.placement = placement;
    }

    /// Sets the `Placement` member and returns the updated value.
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<SpotPlacement>) -> Self {
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
}

impl Shape for LaunchSpecification {
    const SHAPE_NAME: &'static str = "LaunchSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("UserData", false, self.user_data.as_ref()),
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("AddressingType", false, self.addressing_type.as_ref()),
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("IamInstanceProfile", false, self.iam_instance_profile.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("KeyName", false, self.key_name.as_ref()),
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
            Member::new("RamdiskId", false, self.ramdisk_id.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("Monitoring", false, self.monitoring.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplate.
///
/// Describes a launch template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplate {
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(rename = "CreatedBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(rename = "DefaultVersionNumber", skip_serializing_if = "Option::is_none")]
    pub default_version_number: Option<i64>,
    #[serde(rename = "LatestVersionNumber", skip_serializing_if = "Option::is_none")]
    pub latest_version_number: Option<i64>,
    #[serde(rename = "LaunchTemplateId", skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<String>,
    #[serde(rename = "LaunchTemplateName", skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl LaunchTemplate {
    /// Returns the `CreateTime` member.
    #[must_use]
    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    /// Sets the `CreateTime` member, replacing any previous value.
    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time;
    }

    /// Sets the `CreateTime` member and returns the updated value.
    #[must_use]
    pub fn with_create_time(mut self, create_time: impl Into<DateTime<Utc>>) -> Self {
        self.create_time = Some(create_time.into());
        self
    }

    /// Returns the `CreatedBy` member.
    #[must_use]
    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    /// Sets the `CreatedBy` member, replacing any previous value.
    pub fn set_created_by(&mut self, created_by: Option<String>) {
        self.created_by = created_by;
    }

    /// Sets the `CreatedBy` member and returns the updated value.
    #[must_use]
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    /// Returns the `DefaultVersionNumber` member.
    #[must_use]
    pub fn default_version_number(&self) -> Option<i64> {
        self.default_version_number
    }

    /// Sets the `DefaultVersionNumber` member, replacing any previous value.
    pub fn set_default_version_number(&mut self, default_version_number: Option<i64>) {
        self.default_version_number = default_version_number;
    }

    /// Sets the `DefaultVersionNumber` member and returns the updated value.
    #[must_use]
    pub fn with_default_version_number(mut self, default_version_number: impl Into<i64>) -> Self {
        self.default_version_number = Some(default_version_number.into());
        self
    }

    /// Returns the `LatestVersionNumber` member.
    #[must_use]
    pub fn latest_version_number(&self) -> Option<i64> {
        self.latest_version_number
    }

    /// Sets the `LatestVersionNumber` member, replacing any previous value.
    pub fn set_latest_version_number(&mut self, latest_version_number: Option<i64>) {
        self.latest_version_number = latest_version_number;
    }

    /// Sets the `LatestVersionNumber` member and returns the updated value.
    #[must_use]
    pub fn with_latest_version_number(mut self, latest_version_number: impl Into<i64>) -> Self {
        self.latest_version_number = Some(latest_version_number.into());
        self
    }

    /// Returns the `LaunchTemplateId` member.
    #[must_use]
    pub fn launch_template_id(&self) -> Option<&str> {
        self.launch_template_id.as_deref()
    }

    /// Sets the `LaunchTemplateId` member, replacing any previous value.
    pub fn set_launch_template_id(&mut self, launch_template_id: Option<String>) {
        self.launch_template_id = launch_template_id;
    }

    /// Sets the `LaunchTemplateId` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_id(mut self, launch_template_id: impl Into<String>) -> Self {
        self.launch_template_id = Some(launch_template_id.into());
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

impl Shape for LaunchTemplate {
    const SHAPE_NAME: &'static str = "LaunchTemplate";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CreateTime", false, self.create_time.as_ref()),
            Member::new("CreatedBy", false, self.created_by.as_ref()),
            Member::new("DefaultVersionNumber", false, self.default_version_number.as_ref()),
            Member::new("LatestVersionNumber", false, self.latest_version_number.as_ref()),
            Member::new("LaunchTemplateId", false, self.launch_template_id.as_ref()),
            Member::new("LaunchTemplateName", false, self.launch_template_name.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateAndOverridesResponse.
///
/// Describes a launch template and overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateAndOverridesResponse {
    #[serde(rename = "LaunchTemplateSpecification", skip_serializing_if = "Option::is_none")]
    pub launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    #[serde(rename = "Overrides", skip_serializing_if = "Option::is_none")]
    pub overrides: Option<FleetLaunchTemplateOverrides>,
}

impl LaunchTemplateAndOverridesResponse {
    /// Returns the `LaunchTemplateSpecification` member.
    #[must_use]
    pub fn launch_template_specification(&self) -> Option<&FleetLaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    /// Sets the `LaunchTemplateSpecification` member, replacing any previous value.
    pub fn set_launch_template_specification(
        &mut self,
        launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    ) {
        self.launch_template_specification = launch_template_specification;
    }

    /// Sets the `LaunchTemplateSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_specification(
        mut self,
        launch_template_specification: impl Into<FleetLaunchTemplateSpecification>,
    ) -> Self {
        self.launch_template_specification = Some(launch_template_specification.into());
        self
    }

    /// Returns the `Overrides` member.
    #[must_use]
    pub fn overrides(&self) -> Option<&FleetLaunchTemplateOverrides> {
        self.overrides.as_ref()
    }

    /// Sets the `Overrides` member, replacing any previous value.
    pub fn set_overrides(&mut self, overrides: Option<FleetLaunchTemplateOverrides>) {
        self.overrides = overrides;
    }

    /// Sets the `Overrides` member and returns the updated value.
    #[must_use]
    pub fn with_overrides(mut self, overrides: impl Into<FleetLaunchTemplateOverrides>) -> Self {
        self.overrides = Some(overrides.into());
        self
    }
}

impl Shape for LaunchTemplateAndOverridesResponse {
    const SHAPE_NAME: &'static str = "LaunchTemplateAndOverridesResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "LaunchTemplateSpecification",
                false,
                self.launch_template_specification.as_ref(),
            ),
            Member::new("Overrides", false, self.overrides.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateAndOverridesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateBlockDeviceMapping.
///
/// Describes a block device mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateBlockDeviceMapping {
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(rename = "VirtualName", skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    pub ebs: Option<LaunchTemplateEbsBlockDevice>,
    #[serde(rename = "NoDevice", skip_serializing_if = "Option::is_none")]
    pub no_device: Option<String>,
}

impl LaunchTemplateBlockDeviceMapping {
    /// Returns the `DeviceName` member.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Sets the `DeviceName` member, replacing any previous value.
    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    /// Sets the `DeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Returns the `VirtualName` member.
    #[must_use]
    pub fn virtual_name(&self) -> Option<&str> {
        self.virtual_name.as_deref()
    }

    /// Sets the `VirtualName` member, replacing any previous value.
    pub fn set_virtual_name(&mut self, virtual_name: Option<String>) {
        self.virtual_name = virtual_name;
    }

    /// Sets the `VirtualName` member and returns the updated value.
    #[must_use]
    pub fn with_virtual_name(mut self, virtual_name: impl Into<String>) -> Self {
        self.virtual_name = Some(virtual_name.into());
        self
    }

    /// Returns the `Ebs` member.
    #[must_use]
    pub fn ebs(&self) -> Option<&LaunchTemplateEbsBlockDevice> {
        self.ebs.as_ref()
    }

    /// Sets the `Ebs` member, replacing any previous value.
    pub fn set_ebs(&mut self, ebs: Option<LaunchTemplateEbsBlockDevice>) {
        self.ebs = ebs;
    }

    /// Sets the `Ebs` member and returns the updated value.
    #[must_use]
    pub fn with_ebs(mut self, ebs: impl Into<LaunchTemplateEbsBlockDevice>) -> Self {
        self.ebs = Some(ebs.into());
        self
    }

    /// Returns the `NoDevice` member.
    #[must_use]
    pub fn no_device(&self) -> Option<&str> {
        self.no_device.as_deref()
    }

    /// Sets the `NoDevice` member, replacing any previous value.
    pub fn set_no_device(&mut self, no_device: Option<String>) {
        self.no_device = no_device;
    }

    /// Sets the `NoDevice` member and returns the updated value.
    #[must_use]
    pub fn with_no_device(mut self, no_device: impl Into<String>) -> Self {
        self.no_device = Some(no_device.into());
        self
    }
}

impl Shape for LaunchTemplateBlockDeviceMapping {
    const SHAPE_NAME: &'static str = "LaunchTemplateBlockDeviceMapping";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DeviceName", false, self.device_name.as_ref()),
            Member::new("VirtualName", false, self.virtual_name.as_ref()),
            Member::new("Ebs", false, self.ebs.as_ref()),
            Member::new("NoDevice", false, self.no_device.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateBlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateBlockDeviceMappingRequest.
///
/// Describes a block device mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateBlockDeviceMappingRequest {
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(rename = "VirtualName", skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    #[serde(rename = "Ebs", skip_serializing_if = "Option::is_none")]
    pub ebs: Option<LaunchTemplateEbsBlockDeviceRequest>,
    #[serde(rename = "NoDevice", skip_serializing_if = "Option::is_none")]
    pub no_device: Option<String>,
}

impl LaunchTemplateBlockDeviceMappingRequest {
    /// Returns the `DeviceName` member.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Sets the `DeviceName` member, replacing any previous value.
    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    /// Sets the `DeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Returns the `VirtualName` member.
    #[must_use]
    pub fn virtual_name(&self) -> Option<&str> {
        self.virtual_name.as_deref()
    }

    /// Sets the `VirtualName` member, replacing any previous value.
    pub fn set_virtual_name(&mut self, virtual_name: Option<String>) {
        self.virtual_name = virtual_name;
    }

    /// Sets the `VirtualName` member and returns the updated value.
    #[must_use]
    pub fn with_virtual_name(mut self, virtual_name: impl Into<String>) -> Self {
        self.virtual_name = Some(virtual_name.into());
        self
    }

    /// Returns the `Ebs` member.
    #[must_use]
    pub fn ebs(&self) -> Option<&LaunchTemplateEbsBlockDeviceRequest> {
        self.ebs.as_ref()
    }

    /// Sets the `Ebs` member, replacing any previous value.
    pub fn set_ebs(&mut self, ebs: Option<LaunchTemplateEbsBlockDeviceRequest>) {
        self.ebs = ebs;
    }

    /// Sets the `Ebs` member and returns the updated value.
    #[must_use]
    pub fn with_ebs(mut self, ebs: impl Into<LaunchTemplateEbsBlockDeviceRequest>) -> Self {
        self.ebs = Some(ebs.into());
        self
    }

    /// Returns the `NoDevice` member.
    #[must_use]
    pub fn no_device(&self) -> Option<&str> {
        self.no_device.as_deref()
    }

    /// Sets the `NoDevice` member, replacing any previous value.
    pub fn set_no_device(&mut self, no_device: Option<String>) {
        self.no_device = no_device;
    }

    /// Sets the `NoDevice` member and returns the updated value.
    #[must_use]
    pub fn with_no_device(mut self, no_device: impl Into<String>) -> Self {
        self.no_device = Some(no_device.into());
        self
    }
}

impl Shape for LaunchTemplateBlockDeviceMappingRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateBlockDeviceMappingRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DeviceName", false, self.device_name.as_ref()),
            Member::new("VirtualName", false, self.virtual_name.as_ref()),
            Member::new("Ebs", false, self.ebs.as_ref()),
            Member::new("NoDevice", false, self.no_device.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateBlockDeviceMappingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateCapacityReservationSpecificationRequest.
///
/// Describes an instance's Capacity Reservation targeting option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateCapacityReservationSpecificationRequest {
    #[serde(rename = "CapacityReservationPreference", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_preference: Option<CapacityReservationPreference>,
    #[serde(rename = "CapacityReservationTarget", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_target: Option<CapacityReservationTarget>,
}

impl LaunchTemplateCapacityReservationSpecificationRequest {
    /// Returns the `CapacityReservationPreference` member.
    #[must_use]
    pub fn capacity_reservation_preference(&self) -> Option<&CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// Sets the `CapacityReservationPreference` member, replacing any previous value.
    pub fn set_capacity_reservation_preference(
        &mut self,
        capacity_reservation_preference: Option<CapacityReservationPreference>,
    ) {
        self.capacity_reservation_preference = capacity_reservation_preference;
    }

    /// Sets the `CapacityReservationPreference` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_preference(
        mut self,
        capacity_reservation_preference: impl Into<CapacityReservationPreference>,
    ) -> Self {
        self.capacity_reservation_preference = Some(capacity_reservation_preference.into());
        self
    }

    /// Returns the `CapacityReservationTarget` member.
    #[must_use]
    pub fn capacity_reservation_target(&self) -> Option<&CapacityReservationTarget> {
        self.capacity_reservation_target.as_ref()
    }

    /// Sets the `CapacityReservationTarget` member, replacing any previous value.
    pub fn set_capacity_reservation_target(
        &mut self,
        capacity_reservation_target: Option<CapacityReservationTarget>,
    ) {
        self.capacity_reservation_target = capacity_reservation_target;
    }

    /// Sets the `CapacityReservationTarget` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_target(
        mut self,
        capacity_reservation_target: impl Into<CapacityReservationTarget>,
    ) -> Self {
        self.capacity_reservation_target = Some(capacity_reservation_target.into());
        self
    }
}

impl Shape for LaunchTemplateCapacityReservationSpecificationRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateCapacityReservationSpecificationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "CapacityReservationPreference",
                false,
                self.capacity_reservation_preference.as_ref(),
            ),
            Member::new(
                "CapacityReservationTarget",
                false,
                self.capacity_reservation_target.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for LaunchTemplateCapacityReservationSpecificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateCapacityReservationSpecificationResponse.
///
/// Information about the Capacity Reservation targeting option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateCapacityReservationSpecificationResponse {
    #[serde(rename = "CapacityReservationPreference", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_preference: Option<CapacityReservationPreference>,
    #[serde(rename = "CapacityReservationTarget", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_target: Option<CapacityReservationTargetResponse>,
}

impl LaunchTemplateCapacityReservationSpecificationResponse {
    /// Returns the `CapacityReservationPreference` member.
    #[must_use]
    pub fn capacity_reservation_preference(&self) -> Option<&CapacityReservationPreference> {
        self.capacity_reservation_preference.as_ref()
    }

    /// Sets the `CapacityReservationPreference` member, replacing any previous value.
    pub fn set_capacity_reservation_preference(
        &mut self,
        capacity_reservation_preference: Option<CapacityReservationPreference>,
    ) {
        self.capacity_reservation_preference = capacity_reservation_preference;
    }

    /// Sets the `CapacityReservationPreference` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_preference(
        mut self,
        capacity_reservation_preference: impl Into<CapacityReservationPreference>,
    ) -> Self {
        self.capacity_reservation_preference = Some(capacity_reservation_preference.into());
        self
    }

    /// Returns the `CapacityReservationTarget` member.
    #[must_use]
    pub fn capacity_reservation_target(&self) -> Option<&CapacityReservationTargetResponse> {
        self.capacity_reservation_target.as_ref()
    }

    /// Sets the `CapacityReservationTarget` member, replacing any previous value.
    pub fn set_capacity_reservation_target(
        &mut self,
        capacity_reservation_target: Option<CapacityReservationTargetResponse>,
    ) {
        self.capacity_reservation_target = capacity_reservation_target;
    }

    /// Sets the `CapacityReservationTarget` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_target(
        mut self,
        capacity_reservation_target: impl Into<CapacityReservationTargetResponse>,
    ) -> Self {
        self.capacity_reservation_target = Some(capacity_reservation_target.into());
        self
    }
}

impl Shape for LaunchTemplateCapacityReservationSpecificationResponse {
    const SHAPE_NAME: &'static str = "LaunchTemplateCapacityReservationSpecificationResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "CapacityReservationPreference",
                false,
                self.capacity_reservation_preference.as_ref(),
            ),
            Member::new(
                "CapacityReservationTarget",
                false,
                self.capacity_reservation_target.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for LaunchTemplateCapacityReservationSpecificationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateConfig.
///
/// Describes a launch template and overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateConfig {
    #[serde(rename = "LaunchTemplateSpecification", skip_serializing_if = "Option::is_none")]
    pub launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    #[serde(rename = "Overrides", skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<LaunchTemplateOverrides>>,
}

impl LaunchTemplateConfig {
    /// Returns the `LaunchTemplateSpecification` member.
    #[must_use]
    pub fn launch_template_specification(&self) -> Option<&FleetLaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    /// Sets the `LaunchTemplateSpecification` member, replacing any previous value.
    pub fn set_launch_template_specification(
        &mut self,
        launch_template_specification: Option<FleetLaunchTemplateSpecification>,
    ) {
        self.launch_template_specification = launch_template_specification;
    }

    /// Sets the `LaunchTemplateSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_specification(
        mut self,
        launch_template_specification: impl Into<FleetLaunchTemplateSpecification>,
    ) -> Self {
        self.launch_template_specification = Some(launch_template_specification.into());
        self
    }

    /// Returns the `Overrides` member.
    #[must_use]
    pub fn overrides(&self) -> Option<&[LaunchTemplateOverrides]> {
        self.overrides.as_deref()
    }

    /// Sets the `Overrides` member, replacing any previous value.
    pub fn set_overrides(&mut self, overrides: Option<Vec<LaunchTemplateOverrides>>) {
        self.overrides = overrides;
    }

    /// Appends to the `Overrides` member and returns the updated value.
    #[must_use]
    pub fn with_overrides(
        mut self,
        overrides: impl IntoIterator<Item = impl Into<LaunchTemplateOverrides>>,
    ) -> Self {
        self.overrides
            .get_or_insert_with(Vec::new)
            .extend(overrides.into_iter().map(Into::into));
        self
    }
}

impl Shape for LaunchTemplateConfig {
    const SHAPE_NAME: &'static str = "LaunchTemplateConfig";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "LaunchTemplateSpecification",
                false,
                self.launch_template_specification.as_ref(),
            ),
            Member::new("Overrides", false, self.overrides.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateCpuOptions.
///
/// The CPU options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateCpuOptions {
    #[serde(rename = "CoreCount", skip_serializing_if = "Option::is_none")]
    pub core_count: Option<i32>,
    #[serde(rename = "ThreadsPerCore", skip_serializing_if = "Option::is_none")]
    pub threads_per_core: Option<i32>,
}

impl LaunchTemplateCpuOptions {
    /// Returns the `CoreCount` member.
    #[must_use]
    pub fn core_count(&self) -> Option<i32> {
        self.core_count
    }

    /// Sets the `CoreCount` member, replacing any previous value.
    pub fn set_core_count(&mut self, core_count: Option<i32>) {
        self.core_count = core_count;
    }

    /// Sets the `CoreCount` member and returns the updated value.
    #[must_use]
    pub fn with_core_count(mut self, core_count: impl Into<i32>) -> Self {
        self.core_count = Some(core_count.into());
        self
    }

    /// Returns the `ThreadsPerCore` member.
    #[must_use]
    pub fn threads_per_core(&self) -> Option<i32> {
        self.threads_per_core
    }

    /// Sets the `ThreadsPerCore` member, replacing any previous value.
    pub fn set_threads_per_core(&mut self, threads_per_core: Option<i32>) {
        self.threads_per_core = threads_per_core;
    }

    /// Sets the `ThreadsPerCore` member and returns the updated value.
    #[must_use]
    pub fn with_threads_per_core(mut self, threads_per_core: impl Into<i32>) -> Self {
        self.threads_per_core = Some(threads_per_core.into());
        self
    }
}

impl Shape for LaunchTemplateCpuOptions {
    const SHAPE_NAME: &'static str = "LaunchTemplateCpuOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CoreCount", false, self.core_count.as_ref()),
            Member::new("ThreadsPerCore", false, self.threads_per_core.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateCpuOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateCpuOptionsRequest.
///
/// The CPU options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateCpuOptionsRequest {
    #[serde(rename = "CoreCount", skip_serializing_if = "Option::is_none")]
    pub core_count: Option<i32>,
    #[serde(rename = "ThreadsPerCore", skip_serializing_if = "Option::is_none")]
    pub threads_per_core: Option<i32>,
}

impl LaunchTemplateCpuOptionsRequest {
    /// Returns the `CoreCount` member.
    #[must_use]
    pub fn core_count(&self) -> Option<i32> {
        self.core_count
    }

    /// Sets the `CoreCount` member, replacing any previous value.
    pub fn set_core_count(&mut self, core_count: Option<i32>) {
        self.core_count = core_count;
    }

    /// Sets the `CoreCount` member and returns the updated value.
    #[must_use]
    pub fn with_core_count(mut self, core_count: impl Into<i32>) -> Self {
        self.core_count = Some(core_count.into());
        self
    }

    /// Returns the `ThreadsPerCore` member.
    #[must_use]
    pub fn threads_per_core(&self) -> Option<i32> {
        self.threads_per_core
    }

    /// Sets the `ThreadsPerCore` member, replacing any previous value.
    pub fn set_threads_per_core(&mut self, threads_per_core: Option<i32>) {
        self.threads_per_core = threads_per_core;
    }

    /// Sets the `ThreadsPerCore` member and returns the updated value.
    #[must_use]
    pub fn with_threads_per_core(mut self, threads_per_core: impl Into<i32>) -> Self {
        self.threads_per_core = Some(threads_per_core.into());
        self
    }
}

impl Shape for LaunchTemplateCpuOptionsRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateCpuOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("CoreCount", false, self.core_count.as_ref()),
            Member::new("ThreadsPerCore", false, self.threads_per_core.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateCpuOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateEbsBlockDevice.
///
/// Describes a block device for an EBS volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateEbsBlockDevice {
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
}

impl LaunchTemplateEbsBlockDevice {
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

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
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

    /// Returns the `VolumeSize` member.
    #[must_use]
    pub fn volume_size(&self) -> Option<i32> {
        self.volume_size
    }

    /// Sets the `VolumeSize` member, replacing any previous value.
    pub fn set_volume_size(&mut self, volume_size: Option<i32>) {
        self.volume_size = volume_size;
    }

    /// Sets the `VolumeSize` member and returns the updated value.
    #[must_use]
    pub fn with_volume_size(mut self, volume_size: impl Into<i32>) -> Self {
        self.volume_size = Some(volume_size.into());
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
}

impl Shape for LaunchTemplateEbsBlockDevice {
    const SHAPE_NAME: &'static str = "LaunchTemplateEbsBlockDevice";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Encrypted", false, self.encrypted.as_ref()),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Iops", false, self.iops.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("VolumeSize", false, self.volume_size.as_ref()),
            Member::new("VolumeType", false, self.volume_type.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateEbsBlockDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateEbsBlockDeviceRequest.
///
/// The parameters for a block device for an EBS volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateEbsBlockDeviceRequest {
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(rename = "VolumeSize", skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
}

impl LaunchTemplateEbsBlockDeviceRequest {
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

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
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

    /// Returns the `VolumeSize` member.
    #[must_use]
    pub fn volume_size(&self) -> Option<i32> {
        self.volume_size
    }

    /// Sets the `VolumeSize` member, replacing any previous value.
    pub fn set_volume_size(&mut self, volume_size: Option<i32>) {
        self.volume_size = volume_size;
    }

    /// Sets the `VolumeSize` member and returns the updated value.
    #[must_use]
    pub fn with_volume_size(mut self, volume_size: impl Into<i32>) -> Self {
        self.volume_size = Some(volume_size.into());
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
}

impl Shape for LaunchTemplateEbsBlockDeviceRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateEbsBlockDeviceRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Encrypted", false, self.encrypted.as_ref()),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Iops", false, self.iops.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("VolumeSize", false, self.volume_size.as_ref()),
            Member::new("VolumeType", false, self.volume_type.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateEbsBlockDeviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateElasticInferenceAccelerator.
///
/// Describes an elastic inference accelerator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateElasticInferenceAccelerator {
    /// The type of elastic inference accelerator.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

impl LaunchTemplateElasticInferenceAccelerator {
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

    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }
}

impl Shape for LaunchTemplateElasticInferenceAccelerator {
    const SHAPE_NAME: &'static str = "LaunchTemplateElasticInferenceAccelerator";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Type", true, self.r#type.as_ref()),
            Member::new("Count", false, self.count.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateElasticInferenceAccelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateElasticInferenceAcceleratorResponse.
///
/// Describes an elastic inference accelerator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateElasticInferenceAcceleratorResponse {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
}

impl LaunchTemplateElasticInferenceAcceleratorResponse {
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

    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }
}

impl Shape for LaunchTemplateElasticInferenceAcceleratorResponse {
    const SHAPE_NAME: &'static str = "LaunchTemplateElasticInferenceAcceleratorResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Type", false, self.r#type.as_ref()),
            Member::new("Count", false, self.count.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateElasticInferenceAcceleratorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateHibernationOptions.
///
/// Indicates whether an instance is configured for hibernation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateHibernationOptions {
    #[serde(rename = "Configured", skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

impl LaunchTemplateHibernationOptions {
    /// Returns the `Configured` member.
    #[must_use]
    pub fn configured(&self) -> Option<bool> {
        self.configured
    }

    /// Sets the `Configured` member, replacing any previous value.
    pub fn set_configured(&mut self, configured: Option<bool>) {
        self.configured = configured;
    }

    /// Sets the `Configured` member and returns the updated value.
    #[must_use]
    pub fn with_configured(mut self, configured: impl Into<bool>) -> Self {
        self.configured = Some(configured.into());
        self
    }
}

impl Shape for LaunchTemplateHibernationOptions {
    const SHAPE_NAME: &'static str = "LaunchTemplateHibernationOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Configured", false, self.configured.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateHibernationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateHibernationOptionsRequest.
///
/// Indicates whether the instance is configured for hibernation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateHibernationOptionsRequest {
    #[serde(rename = "Configured", skip_serializing_if = "Option::is_none")]
    pub configured: Option<bool>,
}

impl LaunchTemplateHibernationOptionsRequest {
    /// Returns the `Configured` member.
    #[must_use]
    pub fn configured(&self) -> Option<bool> {
        self.configured
    }

    /// Sets the `Configured` member, replacing any previous value.
    pub fn set_configured(&mut self, configured: Option<bool>) {
        self.configured = configured;
    }

    /// Sets the `Configured` member and returns the updated value.
    #[must_use]
    pub fn with_configured(mut self, configured: impl Into<bool>) -> Self {
        self.configured = Some(configured.into());
        self
    }
}

impl Shape for LaunchTemplateHibernationOptionsRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateHibernationOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Configured", false, self.configured.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateHibernationOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateIamInstanceProfileSpecification.
///
/// Describes an IAM instance profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateIamInstanceProfileSpecification {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LaunchTemplateIamInstanceProfileSpecification {
    /// Returns the `Arn` member.
    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    /// Sets the `Arn` member, replacing any previous value.
    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    /// Sets the `Arn` member and returns the updated value.
    #[must_use]
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Shape for LaunchTemplateIamInstanceProfileSpecification {
    const SHAPE_NAME: &'static str = "LaunchTemplateIamInstanceProfileSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Arn", false, self.arn.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateIamInstanceProfileSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateIamInstanceProfileSpecificationRequest.
///
/// An IAM instance profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateIamInstanceProfileSpecificationRequest {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LaunchTemplateIamInstanceProfileSpecificationRequest {
    /// Returns the `Arn` member.
    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    /// Sets the `Arn` member, replacing any previous value.
    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    /// Sets the `Arn` member and returns the updated value.
    #[must_use]
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Returns the `Name` member.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the `Name` member, replacing any previous value.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets the `Name` member and returns the updated value.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Shape for LaunchTemplateIamInstanceProfileSpecificationRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateIamInstanceProfileSpecificationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Arn", false, self.arn.as_ref()),
            Member::new("Name", false, self.name.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateIamInstanceProfileSpecificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateInstanceMarketOptions.
///
/// The market (purchasing) option for the instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateInstanceMarketOptions {
    #[serde(rename = "MarketType", skip_serializing_if = "Option::is_none")]
    pub market_type: Option<MarketType>,
    #[serde(rename = "SpotOptions", skip_serializing_if = "Option::is_none")]
    pub spot_options: Option<LaunchTemplateSpotMarketOptions>,
}

impl LaunchTemplateInstanceMarketOptions {
    /// Returns the `MarketType` member.
    #[must_use]
    pub fn market_type(&self) -> Option<&MarketType> {
        self.market_type.as_ref()
    }

    /// Sets the `MarketType` member, replacing any previous value.
    pub fn set_market_type(&mut self, market_type: Option<MarketType>) {
        self.market_type = market_type;
    }

    /// Sets the `MarketType` member and returns the updated value.
    #[must_use]
    pub fn with_market_type(mut self, market_type: impl Into<MarketType>) -> Self {
        self.market_type = Some(market_type.into());
        self
    }

    /// Returns the `SpotOptions` member.
    #[must_use]
    pub fn spot_options(&self) -> Option<&LaunchTemplateSpotMarketOptions> {
        self.spot_options.as_ref()
    }

    /// Sets the `SpotOptions` member, replacing any previous value.
    pub fn set_spot_options(&mut self, spot_options: Option<LaunchTemplateSpotMarketOptions>) {
        self.spot_options = spot_options;
    }

    /// Sets the `SpotOptions` member and returns the updated value.
    #[must_use]
    pub fn with_spot_options(
        mut self,
        spot_options: impl Into<LaunchTemplateSpotMarketOptions>,
    ) -> Self {
        self.spot_options = Some(spot_options.into());
        self
    }
}

impl Shape for LaunchTemplateInstanceMarketOptions {
    const SHAPE_NAME: &'static str = "LaunchTemplateInstanceMarketOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("MarketType", false, self.market_type.as_ref()),
            Member::new("SpotOptions", false, self.spot_options.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateInstanceMarketOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateInstanceMarketOptionsRequest.
///
/// The market (purchasing) option for the instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateInstanceMarketOptionsRequest {
    #[serde(rename = "MarketType", skip_serializing_if = "Option::is_none")]
    pub market_type: Option<MarketType>,
    #[serde(rename = "SpotOptions", skip_serializing_if = "Option::is_none")]
    pub spot_options: Option<LaunchTemplateSpotMarketOptionsRequest>,
}

impl LaunchTemplateInstanceMarketOptionsRequest {
    /// Returns the `MarketType` member.
    #[must_use]
    pub fn market_type(&self) -> Option<&MarketType> {
        self.market_type.as_ref()
    }

    /// Sets the `MarketType` member, replacing any previous value.
    pub fn set_market_type(&mut self, market_type: Option<MarketType>) {
        self.market_type = market_type;
    }

    /// Sets the `MarketType` member and returns the updated value.
    #[must_use]
    pub fn with_market_type(mut self, market_type: impl Into<MarketType>) -> Self {
        self.market_type = Some(market_type.into());
        self
    }

    /// Returns the `SpotOptions` member.
    #[must_use]
    pub fn spot_options(&self) -> Option<&LaunchTemplateSpotMarketOptionsRequest> {
        self.spot_options.as_ref()
    }

    /// Sets the `SpotOptions` member, replacing any previous value.
    pub fn set_spot_options(
        &mut self,
        spot_options: Option<LaunchTemplateSpotMarketOptionsRequest>,
    ) {
        self.spot_options = spot_options;
    }

    /// Sets the `SpotOptions` member and returns the updated value.
    #[must_use]
    pub fn with_spot_options(
        mut self,
        spot_options: impl Into<LaunchTemplateSpotMarketOptionsRequest>,
    ) -> Self {
        self.spot_options = Some(spot_options.into());
        self
    }
}

impl Shape for LaunchTemplateInstanceMarketOptionsRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateInstanceMarketOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("MarketType", false, self.market_type.as_ref()),
            Member::new("SpotOptions", false, self.spot_options.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateInstanceMarketOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateInstanceMetadataOptions.
///
/// The metadata options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateInstanceMetadataOptions {
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<LaunchTemplateInstanceMetadataOptionsState>,
    #[serde(rename = "HttpTokens", skip_serializing_if = "Option::is_none")]
    pub http_tokens: Option<LaunchTemplateHttpTokensState>,
    #[serde(rename = "HttpPutResponseHopLimit", skip_serializing_if = "Option::is_none")]
    pub http_put_response_hop_limit: Option<i32>,
    #[serde(rename = "HttpEndpoint", skip_serializing_if = "Option::is_none")]
    pub http_endpoint: Option<LaunchTemplateInstanceMetadataEndpointState>,
}

impl LaunchTemplateInstanceMetadataOptions {
    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&LaunchTemplateInstanceMetadataOptionsState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<LaunchTemplateInstanceMetadataOptionsState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(
        mut self,
        state: impl Into<LaunchTemplateInstanceMetadataOptionsState>,
    ) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `HttpTokens` member.
    #[must_use]
    pub fn http_tokens(&self) -> Option<&LaunchTemplateHttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// Sets the `HttpTokens` member, replacing any previous value.
    pub fn set_http_tokens(&mut self, http_tokens: Option<LaunchTemplateHttpTokensState>) {
        self.http_tokens = http_tokens;
    }

    /// Sets the `HttpTokens` member and returns the updated value.
    #[must_use]
    pub fn with_http_tokens(
        mut self,
        http_tokens: impl Into<LaunchTemplateHttpTokensState>,
    ) -> Self {
        self.http_tokens = Some(http_tokens.into());
        self
    }

    /// Returns the `HttpPutResponseHopLimit` member.
    #[must_use]
    pub fn http_put_response_hop_limit(&self) -> Option<i32> {
        self.http_put_response_hop_limit
    }

    /// Sets the `HttpPutResponseHopLimit` member, replacing any previous value.
    pub fn set_http_put_response_hop_limit(&mut self, http_put_response_hop_limit: Option<i32>) {
        self.http_put_response_hop_limit = http_put_response_hop_limit;
    }

    /// Sets the `HttpPutResponseHopLimit` member and returns the updated value.
    #[must_use]
    pub fn with_http_put_response_hop_limit(
        mut self,
        http_put_response_hop_limit: impl Into<i32>,
    ) -> Self {
        self.http_put_response_hop_limit = Some(http_put_response_hop_limit.into());
        self
    }

    /// Returns the `HttpEndpoint` member.
    #[must_use]
    pub fn http_endpoint(&self) -> Option<&LaunchTemplateInstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }

    /// Sets the `HttpEndpoint` member, replacing any previous value.
    pub fn set_http_endpoint(
        &mut self,
        http_endpoint: Option<LaunchTemplateInstanceMetadataEndpointState>,
    ) {
        self.http_endpoint = http_endpoint;
    }

    /// Sets the `HttpEndpoint` member and returns the updated value.
    #[must_use]
    pub fn with_http_endpoint(
        mut self,
        http_endpoint: impl Into<LaunchTemplateInstanceMetadataEndpointState>,
    ) -> Self {
        self.http_endpoint = Some(http_endpoint.into());
        self
    }
}

impl Shape for LaunchTemplateInstanceMetadataOptions {
    const SHAPE_NAME: &'static str = "LaunchTemplateInstanceMetadataOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("State", false, self.state.as_ref()),
            Member::new("HttpTokens", false, self.http_tokens.as_ref()),
            Member::new(
                "HttpPutResponseHopLimit",
                false,
                self.http_put_response_hop_limit.as_ref(),
            ),
            Member::new("HttpEndpoint", false, self.http_endpoint.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateInstanceMetadataOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateInstanceMetadataOptionsRequest.
///
/// The metadata options for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateInstanceMetadataOptionsRequest {
    #[serde(rename = "HttpTokens", skip_serializing_if = "Option::is_none")]
    pub http_tokens: Option<LaunchTemplateHttpTokensState>,
    #[serde(rename = "HttpPutResponseHopLimit", skip_serializing_if = "Option::is_none")]
    pub http_put_response_hop_limit: Option<i32>,
    #[serde(rename = "HttpEndpoint", skip_serializing_if = "Option::is_none")]
    pub http_endpoint: Option<LaunchTemplateInstanceMetadataEndpointState>,
}

impl LaunchTemplateInstanceMetadataOptionsRequest {
    /// Returns the `HttpTokens` member.
    #[must_use]
    pub fn http_tokens(&self) -> Option<&LaunchTemplateHttpTokensState> {
        self.http_tokens.as_ref()
    }

    /// Sets the `HttpTokens` member, replacing any previous value.
    pub fn set_http_tokens(&mut self, http_tokens: Option<LaunchTemplateHttpTokensState>) {
        self.http_tokens = http_tokens;
    }

    /// Sets the `HttpTokens` member and returns the updated value.
    #[must_use]
    pub fn with_http_tokens(
        mut self,
        http_tokens: impl Into<LaunchTemplateHttpTokensState>,
    ) -> Self {
        self.http_tokens = Some(http_tokens.into());
        self
    }

    /// Returns the `HttpPutResponseHopLimit` member.
    #[must_use]
    pub fn http_put_response_hop_limit(&self) -> Option<i32> {
        self.http_put_response_hop_limit
    }

    /// Sets the `HttpPutResponseHopLimit` member, replacing any previous value.
    pub fn set_http_put_response_hop_limit(&mut self, http_put_response_hop_limit: Option<i32>) {
        self.http_put_response_hop_limit = http_put_response_hop_limit;
    }

    /// Sets the `HttpPutResponseHopLimit` member and returns the updated value.
    #[must_use]
    pub fn with_http_put_response_hop_limit(
        mut self,
        http_put_response_hop_limit: impl Into<i32>,
    ) -> Self {
        self.http_put_response_hop_limit = Some(http_put_response_hop_limit.into());
        self
    }

    /// Returns the `HttpEndpoint` member.
    #[must_use]
    pub fn http_endpoint(&self) -> Option<&LaunchTemplateInstanceMetadataEndpointState> {
        self.http_endpoint.as_ref()
    }

    /// Sets the `HttpEndpoint` member, replacing any previous value.
    pub fn set_http_endpoint(
        &mut self,
        http_endpoint: Option<LaunchTemplateInstanceMetadataEndpointState>,
    ) {
        self.http_endpoint = http_endpoint;
    }

    /// Sets the `HttpEndpoint` member and returns the updated value.
    #[must_use]
    pub fn with_http_endpoint(
        mut self,
        http_endpoint: impl Into<LaunchTemplateInstanceMetadataEndpointState>,
    ) -> Self {
        self.http_endpoint = Some(http_endpoint.into());
        self
    }
}

impl Shape for LaunchTemplateInstanceMetadataOptionsRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateInstanceMetadataOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("HttpTokens", false, self.http_tokens.as_ref()),
            Member::new(
                "HttpPutResponseHopLimit",
                false,
                self.http_put_response_hop_limit.as_ref(),
            ),
            Member::new("HttpEndpoint", false, self.http_endpoint.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateInstanceMetadataOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateInstanceNetworkInterfaceSpecification.
///
/// Describes a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateInstanceNetworkInterfaceSpecification {
    #[serde(rename = "AssociatePublicIpAddress", skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "DeviceIndex", skip_serializing_if = "Option::is_none")]
    pub device_index: Option<i32>,
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(rename = "InterfaceType", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
    #[serde(rename = "Ipv6AddressCount", skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<i32>,
    #[serde(rename = "Ipv6Addresses", skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<InstanceIpv6Address>>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "PrivateIpAddresses", skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    #[serde(rename = "SecondaryPrivateIpAddressCount", skip_serializing_if = "Option::is_none")]
    pub secondary_private_ip_address_count: Option<i32>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

impl LaunchTemplateInstanceNetworkInterfaceSpecification {
    /// Returns the `AssociatePublicIpAddress` member.
    #[must_use]
    pub fn associate_public_ip_address(&self) -> Option<bool> {
        self.associate_public_ip_address
    }

    /// Sets the `AssociatePublicIpAddress` member, replacing any previous value.
    pub fn set_associate_public_ip_address(&mut self, associate_public_ip_address: Option<bool>) {
        self.associate_public_ip_address = associate_public_ip_address;
    }

    /// Sets the `AssociatePublicIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_associate_public_ip_address(
        mut self,
        associate_public_ip_address: impl Into<bool>,
    ) -> Self {
        self.associate_public_ip_address = Some(associate_public_ip_address.into());
        self
    }

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
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

    /// Returns the `DeviceIndex` member.
    #[must_use]
    pub fn device_index(&self) -> Option<i32> {
        self.device_index
    }

    /// Sets the `DeviceIndex` member, replacing any previous value.
    pub fn set_device_index(&mut self, device_index: Option<i32>) {
        self.device_index = device_index;
    }

    /// Sets the `DeviceIndex` member and returns the updated value.
    #[must_use]
    pub fn with_device_index(mut self, device_index: impl Into<i32>) -> Self {
        self.device_index = Some(device_index.into());
        self
    }

    /// Returns the `Groups` member.
    #[must_use]
    pub fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    /// Sets the `Groups` member, replacing any previous value.
    pub fn set_groups(&mut self, groups: Option<Vec<String>>) {
        self.groups = groups;
    }

    /// Appends to the `Groups` member and returns the updated value.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `InterfaceType` member.
    #[must_use]
    pub fn interface_type(&self) -> Option<&str> {
        self.interface_type.as_deref()
    }

    /// Sets the `InterfaceType` member, replacing any previous value.
    pub fn set_interface_type(&mut self, interface_type: Option<String>) {
        self.interface_type = interface_type;
    }

    /// Sets the `InterfaceType` member and returns the updated value.
    #[must_use]
    pub fn with_interface_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
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

    /// Returns the `PrivateIpAddresses` member.
    #[must_use]
    pub fn private_ip_addresses(&self) -> Option<&[PrivateIpAddressSpecification]> {
        self.private_ip_addresses.as_deref()
    }

    /// Sets the `PrivateIpAddresses` member, replacing any previous value.
    pub fn set_private_ip_addresses(
        &mut self,
        private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    ) {
        self.private_ip_addresses = private_ip_addresses;
    }

    /// Appends to the `PrivateIpAddresses` member and returns the updated value.
    #[must_use]
    pub fn with_private_ip_addresses(
        mut self,
        private_ip_addresses: impl IntoIterator<Item = impl Into<PrivateIpAddressSpecification>>,
    ) -> Self {
        self.private_ip_addresses
            .get_or_insert_with(Vec::new)
            .extend(private_ip_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `SecondaryPrivateIpAddressCount` member.
    #[must_use]
    pub fn secondary_private_ip_address_count(&self) -> Option<i32> {
        self.secondary_private_ip_address_count
    }

    /// Sets the `SecondaryPrivateIpAddressCount` member, replacing any previous value.
    pub fn set_secondary_private_ip_address_count(
        &mut self,
        secondary_private_ip_address_count: Option<i32>,
    ) {
        self.secondary_private_ip_address_count = secondary_private_ip_address_count;
    }

    /// Sets the `SecondaryPrivateIpAddressCount` member and returns the updated value.
    #[must_use]
    pub fn with_secondary_private_ip_address_count(
        mut self,
        secondary_private_ip_address_count: impl Into<i32>,
    ) -> Self {
        self.secondary_private_ip_address_count = Some(secondary_private_ip_address_count.into());
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
}

impl Shape for LaunchTemplateInstanceNetworkInterfaceSpecification {
    const SHAPE_NAME: &'static str = "LaunchTemplateInstanceNetworkInterfaceSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "AssociatePublicIpAddress",
                false,
                self.associate_public_ip_address.as_ref(),
            ),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("DeviceIndex", false, self.device_index.as_ref()),
            Member::new("Groups", false, self.groups.as_ref()),
            Member::new("InterfaceType", false, self.interface_type.as_ref()),
            Member::new("Ipv6AddressCount", false, self.ipv6_address_count.as_ref()),
            Member::new("Ipv6Addresses", false, self.ipv6_addresses.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("PrivateIpAddresses", false, self.private_ip_addresses.as_ref()),
            Member::new(
                "SecondaryPrivateIpAddressCount",
                false,
                self.secondary_private_ip_address_count.as_ref(),
            ),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateInstanceNetworkInterfaceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateInstanceNetworkInterfaceSpecificationRequest.
///
/// The parameters for a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    #[serde(rename = "AssociatePublicIpAddress", skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "DeviceIndex", skip_serializing_if = "Option::is_none")]
    pub device_index: Option<i32>,
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(rename = "InterfaceType", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<String>,
    #[serde(rename = "Ipv6AddressCount", skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<i32>,
    #[serde(rename = "Ipv6Addresses", skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<InstanceIpv6AddressRequest>>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "PrivateIpAddresses", skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    #[serde(rename = "SecondaryPrivateIpAddressCount", skip_serializing_if = "Option::is_none")]
    pub secondary_private_ip_address_count: Option<i32>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

impl LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    /// Returns the `AssociatePublicIpAddress` member.
    #[must_use]
    pub fn associate_public_ip_address(&self) -> Option<bool> {
        self.associate_public_ip_address
    }

    /// Sets the `AssociatePublicIpAddress` member, replacing any previous value.
    pub fn set_associate_public_ip_address(&mut self, associate_public_ip_address: Option<bool>) {
        self.associate_public_ip_address = associate_public_ip_address;
    }

    /// Sets the `AssociatePublicIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_associate_public_ip_address(
        mut self,
        associate_public_ip_address: impl Into<bool>,
    ) -> Self {
        self.associate_public_ip_address = Some(associate_public_ip_address.into());
        self
    }

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
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

    /// Returns the `DeviceIndex` member.
    #[must_use]
    pub fn device_index(&self) -> Option<i32> {
        self.device_index
    }

    /// Sets the `DeviceIndex` member, replacing any previous value.
    pub fn set_device_index(&mut self, device_index: Option<i32>) {
        self.device_index = device_index;
    }

    /// Sets the `DeviceIndex` member and returns the updated value.
    #[must_use]
    pub fn with_device_index(mut self, device_index: impl Into<i32>) -> Self {
        self.device_index = Some(device_index.into());
        self
    }

    /// Returns the `Groups` member.
    #[must_use]
    pub fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }

    /// Sets the `Groups` member, replacing any previous value.
    pub fn set_groups(&mut self, groups: Option<Vec<String>>) {
        self.groups = groups;
    }

    /// Appends to the `Groups` member and returns the updated value.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `InterfaceType` member.
    #[must_use]
    pub fn interface_type(&self) -> Option<&str> {
        self.interface_type.as_deref()
    }

    /// Sets the `InterfaceType` member, replacing any previous value.
    pub fn set_interface_type(&mut self, interface_type: Option<String>) {
        self.interface_type = interface_type;
    }

    /// Sets the `InterfaceType` member and returns the updated value.
    #[must_use]
    pub fn with_interface_type(mut self, interface_type: impl Into<String>) -> Self {
        self.interface_type = Some(interface_type.into());
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
    pub fn ipv6_addresses(&self) -> Option<&[InstanceIpv6AddressRequest]> {
        self.ipv6_addresses.as_deref()
    }

    /// Sets the `Ipv6Addresses` member, replacing any previous value.
    pub fn set_ipv6_addresses(&mut self, ipv6_addresses: Option<Vec<InstanceIpv6AddressRequest>>) {
        self.ipv6_addresses = ipv6_addresses;
    }

    /// Appends to the `Ipv6Addresses` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_addresses(
        mut self,
        ipv6_addresses: impl IntoIterator<Item = impl Into<InstanceIpv6AddressRequest>>,
    ) -> Self {
        self.ipv6_addresses
            .get_or_insert_with(Vec::new)
            .extend(ipv6_addresses.into_iter().map(Into::into));
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

    /// Returns the `PrivateIpAddresses` member.
    #[must_use]
    pub fn private_ip_addresses(&self) -> Option<&[PrivateIpAddressSpecification]> {
        self.private_ip_addresses.as_deref()
    }

    /// Sets the `PrivateIpAddresses` member, replacing any previous value.
    pub fn set_private_ip_addresses(
        &mut self,
        private_ip_addresses: Option<Vec<PrivateIpAddressSpecification>>,
    ) {
        self.private_ip_addresses = private_ip_addresses;
    }

    /// Appends to the `PrivateIpAddresses` member and returns the updated value.
    #[must_use]
    pub fn with_private_ip_addresses(
        mut self,
        private_ip_addresses: impl IntoIterator<Item = impl Into<PrivateIpAddressSpecification>>,
    ) -> Self {
        self.private_ip_addresses
            .get_or_insert_with(Vec::new)
            .extend(private_ip_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `SecondaryPrivateIpAddressCount` member.
    #[must_use]
    pub fn secondary_private_ip_address_count(&self) -> Option<i32> {
        self.secondary_private_ip_address_count
    }

    /// Sets the `SecondaryPrivateIpAddressCount` member, replacing any previous value.
    pub fn set_secondary_private_ip_address_count(
        &mut self,
        secondary_private_ip_address_count: Option<i32>,
    ) {
        self.secondary_private_ip_address_count = secondary_private_ip_address_count;
    }

    /// Sets the `SecondaryPrivateIpAddressCount` member and returns the updated value.
    #[must_use]
    pub fn with_secondary_private_ip_address_count(
        mut self,
        secondary_private_ip_address_count: impl Into<i32>,
    ) -> Self {
        self.secondary_private_ip_address_count = Some(secondary_private_ip_address_count.into());
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
}

impl Shape for LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateInstanceNetworkInterfaceSpecificationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "AssociatePublicIpAddress",
                false,
                self.associate_public_ip_address.as_ref(),
            ),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("DeviceIndex", false, self.device_index.as_ref()),
            Member::new("Groups", false, self.groups.as_ref()),
            Member::new("InterfaceType", false, self.interface_type.as_ref()),
            Member::new("Ipv6AddressCount", false, self.ipv6_address_count.as_ref()),
            Member::new("Ipv6Addresses", false, self.ipv6_addresses.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("PrivateIpAddresses", false, self.private_ip_addresses.as_ref()),
            Member::new(
                "SecondaryPrivateIpAddressCount",
                false,
                self.secondary_private_ip_address_count.as_ref(),
            ),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateInstanceNetworkInterfaceSpecificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateLicenseConfiguration.
///
/// Describes a license configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateLicenseConfiguration {
    #[serde(rename = "LicenseConfigurationArn", skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl LaunchTemplateLicenseConfiguration {
    /// Returns the `LicenseConfigurationArn` member.
    #[must_use]
    pub fn license_configuration_arn(&self) -> Option<&str> {
        self.license_configuration_arn.as_deref()
    }

    /// Sets the `LicenseConfigurationArn` member, replacing any previous value.
    pub fn set_license_configuration_arn(&mut self, license_configuration_arn: Option<String>) {
        self.license_configuration_arn = license_configuration_arn;
    }

    /// Sets the `LicenseConfigurationArn` member and returns the updated value.
    #[must_use]
    pub fn with_license_configuration_arn(
        mut self,
        license_configuration_arn: impl Into<String>,
    ) -> Self {
        self.license_configuration_arn = Some(license_configuration_arn.into());
        self
    }
}

impl Shape for LaunchTemplateLicenseConfiguration {
    const SHAPE_NAME: &'static str = "LaunchTemplateLicenseConfiguration";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LicenseConfigurationArn", false, self.license_configuration_arn.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateLicenseConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateLicenseConfigurationRequest.
///
/// Describes a license configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateLicenseConfigurationRequest {
    #[serde(rename = "LicenseConfigurationArn", skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl LaunchTemplateLicenseConfigurationRequest {
    /// Returns the `LicenseConfigurationArn` member.
    #[must_use]
    pub fn license_configuration_arn(&self) -> Option<&str> {
        self.license_configuration_arn.as_deref()
    }

    /// Sets the `LicenseConfigurationArn` member, replacing any previous value.
    pub fn set_license_configuration_arn(&mut self, license_configuration_arn: Option<String>) {
        self.license_configuration_arn = license_configuration_arn;
    }

    /// Sets the `LicenseConfigurationArn` member and returns the updated value.
    #[must_use]
    pub fn with_license_configuration_arn(
        mut self,
        license_configuration_arn: impl Into<String>,
    ) -> Self {
        self.license_configuration_arn = Some(license_configuration_arn.into());
        self
    }
}

impl Shape for LaunchTemplateLicenseConfigurationRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateLicenseConfigurationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LicenseConfigurationArn", false, self.license_configuration_arn.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateLicenseConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateOverrides.
///
/// Describes overrides for a launch template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchTemplateOverrides {
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "WeightedCapacity", skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<f64>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

impl LaunchTemplateOverrides {
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

    /// Returns the `SpotPrice` member.
    #[must_use]
    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    /// Sets the `SpotPrice` member, replacing any previous value.
    pub fn set_spot_price(&mut self, spot_price: Option<String>) {
        self.spot_price = spot_price;
    }

    /// Sets the `SpotPrice` member and returns the updated value.
    #[must_use]
    pub fn with_spot_price(mut self, spot_price: impl Into<String>) -> Self {
        self.spot_price = Some(spot_price.into());
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

    /// Returns the `WeightedCapacity` member.
    #[must_use]
    pub fn weighted_capacity(&self) -> Option<f64> {
        self.weighted_capacity
    }

    /// Sets the `WeightedCapacity` member, replacing any previous value.
    pub fn set_weighted_capacity(&mut self, weighted_capacity: Option<f64>) {
        self.weighted_capacity = weighted_capacity;
    }

    /// Sets the `WeightedCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_weighted_capacity(mut self, weighted_capacity: impl Into<f64>) -> Self {
        self.weighted_capacity = Some(weighted_capacity.into());
        self
    }

    /// Returns the `Priority` member.
    #[must_use]
    pub fn priority(&self) -> Option<f64> {
        self.priority
    }

    /// Sets the `Priority` member, replacing any previous value.
    pub fn set_priority(&mut self, priority: Option<f64>) {
        self.priority = priority;
    }

    /// Sets the `Priority` member and returns the updated value.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<f64>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

impl Shape for LaunchTemplateOverrides {
    const SHAPE_NAME: &'static str = "LaunchTemplateOverrides";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("SpotPrice", false, self.spot_price.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("WeightedCapacity", false, self.weighted_capacity.as_ref()),
            Member::new("Priority", false, self.priority.as_ref()),
        ]
    }
}

impl PartialEq for LaunchTemplateOverrides {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for LaunchTemplateOverrides {}

impl Hash for LaunchTemplateOverrides {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for LaunchTemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplatePlacement.
///
/// Describes the placement of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplatePlacement {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Affinity", skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "HostId", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Tenancy>,
    #[serde(rename = "SpreadDomain", skip_serializing_if = "Option::is_none")]
    pub spread_domain: Option<String>,
    #[serde(rename = "HostResourceGroupArn", skip_serializing_if = "Option::is_none")]
    pub host_resource_group_arn: Option<String>,
    #[serde(rename = "PartitionNumber", skip_serializing_if = "Option::is_none")]
    pub partition_number: Option<i32>,
}

impl LaunchTemplatePlacement {
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

    /// Returns the `Affinity` member.
    #[must_use]
    pub fn affinity(&self) -> Option<&str> {
        self.affinity.as_deref()
    }

    /// Sets the `Affinity` member, replacing any previous value.
    pub fn set_affinity(&mut self, affinity: Option<String>) {
        self.affinity = affinity;
    }

    /// Sets the `Affinity` member and returns the updated value.
    #[must_use]
    pub fn with_affinity(mut self, affinity: impl Into<String>) -> Self {
        self.affinity = Some(affinity.into());
        self
    }

    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `HostId` member.
    #[must_use]
    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    /// Sets the `HostId` member, replacing any previous value.
    pub fn set_host_id(&mut self, host_id: Option<String>) {
        self.host_id = host_id;
    }

    /// Sets the `HostId` member and returns the updated value.
    #[must_use]
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }

    /// Returns the `Tenancy` member.
    #[must_use]
    pub fn tenancy(&self) -> Option<&Tenancy> {
        self.tenancy.as_ref()
    }

    /// Sets the `Tenancy` member, replacing any previous value.
    pub fn set_tenancy(&mut self, tenancy: Option<Tenancy>) {
        self.tenancy = tenancy;
    }

    /// Sets the `Tenancy` member and returns the updated value.
    #[must_use]
    pub fn with_tenancy(mut self, tenancy: impl Into<Tenancy>) -> Self {
        self.tenancy = Some(tenancy.into());
        self
    }

    /// Returns the `SpreadDomain` member.
    #[must_use]
    pub fn spread_domain(&self) -> Option<&str> {
        self.spread_domain.as_deref()
    }

    /// Sets the `SpreadDomain` member, replacing any previous value.
    pub fn set_spread_domain(&mut self, spread_domain: Option<String>) {
        self.spread_domain = spread_domain;
    }

    /// Sets the `SpreadDomain` member and returns the updated value.
    #[must_use]
    pub fn with_spread_domain(mut self, spread_domain: impl Into<String>) -> Self {
        self.spread_domain = Some(spread_domain.into());
        self
    }

    /// Returns the `HostResourceGroupArn` member.
    #[must_use]
    pub fn host_resource_group_arn(&self) -> Option<&str> {
        self.host_resource_group_arn.as_deref()
    }

    /// Sets the `HostResourceGroupArn` member, replacing any previous value.
    pub fn set_host_resource_group_arn(&mut self, host_resource_group_arn: Option<String>) {
        self.host_resource_group_arn = host_resource_group_arn;
    }

    /// Sets the `HostResourceGroupArn` member and returns the updated value.
    #[must_use]
    pub fn with_host_resource_group_arn(
        mut self,
        host_resource_group_arn: impl Into<String>,
    ) -> Self {
        self.host_resource_group_arn = Some(host_resource_group_arn.into());
        self
    }

    /// Returns the `PartitionNumber` member.
    #[must_use]
    pub fn partition_number(&self) -> Option<i32> {
        self.partition_number
    }

    /// Sets the `PartitionNumber` member, replacing any previous value.
    pub fn set_partition_number(&mut self, partition_number: Option<i32>) {
        self.partition_number = partition_number;
    }

    /// Sets the `PartitionNumber` member and returns the updated value.
    #[must_use]
    pub fn with_partition_number(mut self, partition_number: impl Into<i32>) -> Self {
        self.partition_number = Some(partition_number.into());
        self
    }
}

impl Shape for LaunchTemplatePlacement {
    const SHAPE_NAME: &'static str = "LaunchTemplatePlacement";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Affinity", false, self.affinity.as_ref()),
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("HostId", false, self.host_id.as_ref()),
            Member::new("Tenancy", false, self.tenancy.as_ref()),
            Member::new("SpreadDomain", false, self.spread_domain.as_ref()),
            Member::new("HostResourceGroupArn", false, self.host_resource_group_arn.as_ref()),
            Member::new("PartitionNumber", false, self.partition_number.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplatePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplatePlacementRequest.
///
/// Describes the placement of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplatePlacementRequest {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Affinity", skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "HostId", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Tenancy>,
    #[serde(rename = "SpreadDomain", skip_serializing_if = "Option::is_none")]
    pub spread_domain: Option<String>,
    #[serde(rename = "HostResourceGroupArn", skip_serializing_if = "Option::is_none")]
    pub host_resource_group_arn: Option<String>,
    #[serde(rename = "PartitionNumber", skip_serializing_if = "Option::is_none")]
    pub partition_number: Option<i32>,
}

impl LaunchTemplatePlacementRequest {
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

    /// Returns the `Affinity` member.
    #[must_use]
    pub fn affinity(&self) -> Option<&str> {
        self.affinity.as_deref()
    }

    /// Sets the `Affinity` member, replacing any previous value.
    pub fn set_affinity(&mut self, affinity: Option<String>) {
        self.affinity = affinity;
    }

    /// Sets the `Affinity` member and returns the updated value.
    #[must_use]
    pub fn with_affinity(mut self, affinity: impl Into<String>) -> Self {
        self.affinity = Some(affinity.into());
        self
    }

    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `HostId` member.
    #[must_use]
    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    /// Sets the `HostId` member, replacing any previous value.
    pub fn set_host_id(&mut self, host_id: Option<String>) {
        self.host_id = host_id;
    }

    /// Sets the `HostId` member and returns the updated value.
    #[must_use]
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }

    /// Returns the `Tenancy` member.
    #[must_use]
    pub fn tenancy(&self) -> Option<&Tenancy> {
        self.tenancy.as_ref()
    }

    /// Sets the `Tenancy` member, replacing any previous value.
    pub fn set_tenancy(&mut self, tenancy: Option<Tenancy>) {
        self.tenancy = tenancy;
    }

    /// Sets the `Tenancy` member and returns the updated value.
    #[must_use]
    pub fn with_tenancy(mut self, tenancy: impl Into<Tenancy>) -> Self {
        self.tenancy = Some(tenancy.into());
        self
    }

    /// Returns the `SpreadDomain` member.
    #[must_use]
    pub fn spread_domain(&self) -> Option<&str> {
        self.spread_domain.as_deref()
    }

    /// Sets the `SpreadDomain` member, replacing any previous value.
    pub fn set_spread_domain(&mut self, spread_domain: Option<String>) {
        self.spread_domain = spread_domain;
    }

    /// Sets the `SpreadDomain` member and returns the updated value.
    #[must_use]
    pub fn with_spread_domain(mut self, spread_domain: impl Into<String>) -> Self {
        self.spread_domain = Some(spread_domain.into());
        self
    }

    /// Returns the `HostResourceGroupArn` member.
    #[must_use]
    pub fn host_resource_group_arn(&self) -> Option<&str> {
        self.host_resource_group_arn.as_deref()
    }

    /// Sets the `HostResourceGroupArn` member, replacing any previous value.
    pub fn set_host_resource_group_arn(&mut self, host_resource_group_arn: Option<String>) {
        self.host_resource_group_arn = host_resource_group_arn;
    }

    /// Sets the `HostResourceGroupArn` member and returns the updated value.
    #[must_use]
    pub fn with_host_resource_group_arn(
        mut self,
        host_resource_group_arn: impl Into<String>,
    ) -> Self {
        self.host_resource_group_arn = Some(host_resource_group_arn.into());
        self
    }

    /// Returns the `PartitionNumber` member.
    #[must_use]
    pub fn partition_number(&self) -> Option<i32> {
        self.partition_number
    }

    /// Sets the `PartitionNumber` member, replacing any previous value.
    pub fn set_partition_number(&mut self, partition_number: Option<i32>) {
        self.partition_number = partition_number;
    }

    /// Sets the `PartitionNumber` member and returns the updated value.
    #[must_use]
    pub fn with_partition_number(mut self, partition_number: impl Into<i32>) -> Self {
        self.partition_number = Some(partition_number.into());
        self
    }
}

impl Shape for LaunchTemplatePlacementRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplatePlacementRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Affinity", false, self.affinity.as_ref()),
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("HostId", false, self.host_id.as_ref()),
            Member::new("Tenancy", false, self.tenancy.as_ref()),
            Member::new("SpreadDomain", false, self.spread_domain.as_ref()),
            Member::new("HostResourceGroupArn", false, self.host_resource_group_arn.as_ref()),
            Member::new("PartitionNumber", false, self.partition_number.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplatePlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateSpecification.
///
/// The launch template to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateSpecification {
    #[serde(rename = "LaunchTemplateId", skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<String>,
    #[serde(rename = "LaunchTemplateName", skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,
    /// The version number of the launch template.
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl LaunchTemplateSpecification {
    /// Returns the `LaunchTemplateId` member.
    #[must_use]
    pub fn launch_template_id(&self) -> Option<&str> {
        self.launch_template_id.as_deref()
    }

    /// Sets the `LaunchTemplateId` member, replacing any previous value.
    pub fn set_launch_template_id(&mut self, launch_template_id: Option<String>) {
        self.launch_template_id = launch_template_id;
    }

    /// Sets the `LaunchTemplateId` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_id(mut self, launch_template_id: impl Into<String>) -> Self {
        self.launch_template_id = Some(launch_template_id.into());
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

    /// Returns the `Version` member.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sets the `Version` member, replacing any previous value.
    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    /// Sets the `Version` member and returns the updated value.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl Shape for LaunchTemplateSpecification {
    const SHAPE_NAME: &'static str = "LaunchTemplateSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LaunchTemplateId", false, self.launch_template_id.as_ref()),
            Member::new("LaunchTemplateName", false, self.launch_template_name.as_ref()),
            Member::new("Version", false, self.version.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateSpotMarketOptions.
///
/// The options for Spot Instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateSpotMarketOptions {
    #[serde(rename = "MaxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(rename = "SpotInstanceType", skip_serializing_if = "Option::is_none")]
    pub spot_instance_type: Option<SpotInstanceType>,
    #[serde(rename = "BlockDurationMinutes", skip_serializing_if = "Option::is_none")]
    pub block_duration_minutes: Option<i32>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
}

impl LaunchTemplateSpotMarketOptions {
    /// Returns the `MaxPrice` member.
    #[must_use]
    pub fn max_price(&self) -> Option<&str> {
        self.max_price.as_deref()
    }

    /// Sets the `MaxPrice` member, replacing any previous value.
    pub fn set_max_price(&mut self, max_price: Option<String>) {
        self.max_price = max_price;
    }

    /// Sets the `MaxPrice` member and returns the updated value.
    #[must_use]
    pub fn with_max_price(mut self, max_price: impl Into<String>) -> Self {
        self.max_price = Some(max_price.into());
        self
    }

    /// Returns the `SpotInstanceType` member.
    #[must_use]
    pub fn spot_instance_type(&self) -> Option<&SpotInstanceType> {
        self.spot_instance_type.as_ref()
    }

    /// Sets the `SpotInstanceType` member, replacing any previous value.
    pub fn set_spot_instance_type(&mut self, spot_instance_type: Option<SpotInstanceType>) {
        self.spot_instance_type = spot_instance_type;
    }

    /// Sets the `SpotInstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_type(
        mut self,
        spot_instance_type: impl Into<SpotInstanceType>,
    ) -> Self {
        self.spot_instance_type = Some(spot_instance_type.into());
        self
    }

    /// Returns the `BlockDurationMinutes` member.
    #[must_use]
    pub fn block_duration_minutes(&self) -> Option<i32> {
        self.block_duration_minutes
    }

    /// Sets the `BlockDurationMinutes` member, replacing any previous value.
    pub fn set_block_duration_minutes(&mut self, block_duration_minutes: Option<i32>) {
        self.block_duration_minutes = block_duration_minutes;
    }

    /// Sets the `BlockDurationMinutes` member and returns the updated value.
    #[must_use]
    pub fn with_block_duration_minutes(mut self, block_duration_minutes: impl Into<i32>) -> Self {
        self.block_duration_minutes = Some(block_duration_minutes.into());
        self
    }

    /// Returns the `ValidUntil` member.
    #[must_use]
    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    /// Sets the `ValidUntil` member, replacing any previous value.
    pub fn set_valid_until(&mut self, valid_until: Option<DateTime<Utc>>) {
        self.valid_until = valid_until;
    }

    /// Sets the `ValidUntil` member and returns the updated value.
    #[must_use]
    pub fn with_valid_until(mut self, valid_until: impl Into<DateTime<Utc>>) -> Self {
        self.valid_until = Some(valid_until.into());
        self
    }

    /// Returns the `InstanceInterruptionBehavior` member.
    #[must_use]
    pub fn instance_interruption_behavior(&self) -> Option<&InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// Sets the `InstanceInterruptionBehavior` member, replacing any previous value.
    pub fn set_instance_interruption_behavior(
        &mut self,
        instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
    ) {
        self.instance_interruption_behavior = instance_interruption_behavior;
    }

    /// Sets the `InstanceInterruptionBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: impl Into<InstanceInterruptionBehavior>,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior.into());
        self
    }
}

impl Shape for LaunchTemplateSpotMarketOptions {
    const SHAPE_NAME: &'static str = "LaunchTemplateSpotMarketOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("MaxPrice", false, self.max_price.as_ref()),
            Member::new("SpotInstanceType", false, self.spot_instance_type.as_ref()),
            Member::new("BlockDurationMinutes", false, self.block_duration_minutes.as_ref()),
            Member::new("ValidUntil", false, self.valid_until.as_ref()),
            Member::new(
                "InstanceInterruptionBehavior",
                false,
                self.instance_interruption_behavior.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for LaunchTemplateSpotMarketOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateSpotMarketOptionsRequest.
///
/// The options for Spot Instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateSpotMarketOptionsRequest {
    #[serde(rename = "MaxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(rename = "SpotInstanceType", skip_serializing_if = "Option::is_none")]
    pub spot_instance_type: Option<SpotInstanceType>,
    #[serde(rename = "BlockDurationMinutes", skip_serializing_if = "Option::is_none")]
    pub block_duration_minutes: Option<i32>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
}

impl LaunchTemplateSpotMarketOptionsRequest {
    /// Returns the `MaxPrice` member.
    #[must_use]
    pub fn max_price(&self) -> Option<&str> {
        self.max_price.as_deref()
    }

    /// Sets the `MaxPrice` member, replacing any previous value.
    pub fn set_max_price(&mut self, max_price: Option<String>) {
        self.max_price = max_price;
    }

    /// Sets the `MaxPrice` member and returns the updated value.
    #[must_use]
    pub fn with_max_price(mut self, max_price: impl Into<String>) -> Self {
        self.max_price = Some(max_price.into());
        self
    }

    /// Returns the `SpotInstanceType` member.
    #[must_use]
    pub fn spot_instance_type(&self) -> Option<&SpotInstanceType> {
        self.spot_instance_type.as_ref()
    }

    /// Sets the `SpotInstanceType` member, replacing any previous value.
    pub fn set_spot_instance_type(&mut self, spot_instance_type: Option<SpotInstanceType>) {
        self.spot_instance_type = spot_instance_type;
    }

    /// Sets the `SpotInstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_type(
        mut self,
        spot_instance_type: impl Into<SpotInstanceType>,
    ) -> Self {
        self.spot_instance_type = Some(spot_instance_type.into());
        self
    }

    /// Returns the `BlockDurationMinutes` member.
    #[must_use]
    pub fn block_duration_minutes(&self) -> Option<i32> {
        self.block_duration_minutes
    }

    /// Sets the `BlockDurationMinutes` member, replacing any previous value.
    pub fn set_block_duration_minutes(&mut self, block_duration_minutes: Option<i32>) {
        self.block_duration_minutes = block_duration_minutes;
    }

    /// Sets the `BlockDurationMinutes` member and returns the updated value.
    #[must_use]
    pub fn with_block_duration_minutes(mut self, block_duration_minutes: impl Into<i32>) -> Self {
        self.block_duration_minutes = Some(block_duration_minutes.into());
        self
    }

    /// Returns the `ValidUntil` member.
    #[must_use]
    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    /// Sets the `ValidUntil` member, replacing any previous value.
    pub fn set_valid_until(&mut self, valid_until: Option<DateTime<Utc>>) {
        self.valid_until = valid_until;
    }

    /// Sets the `ValidUntil` member and returns the updated value.
    #[must_use]
    pub fn with_valid_until(mut self, valid_until: impl Into<DateTime<Utc>>) -> Self {
        self.valid_until = Some(valid_until.into());
        self
    }

    /// Returns the `InstanceInterruptionBehavior` member.
    #[must_use]
    pub fn instance_interruption_behavior(&self) -> Option<&InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// Sets the `InstanceInterruptionBehavior` member, replacing any previous value.
    pub fn set_instance_interruption_behavior(
        &mut self,
        instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
    ) {
        self.instance_interruption_behavior = instance_interruption_behavior;
    }

    /// Sets the `InstanceInterruptionBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: impl Into<InstanceInterruptionBehavior>,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior.into());
        self
    }
}

impl Shape for LaunchTemplateSpotMarketOptionsRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateSpotMarketOptionsRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("MaxPrice", false, self.max_price.as_ref()),
            Member::new("SpotInstanceType", false, self.spot_instance_type.as_ref()),
            Member::new("BlockDurationMinutes", false, self.block_duration_minutes.as_ref()),
            Member::new("ValidUntil", false, self.valid_until.as_ref()),
            Member::new(
                "InstanceInterruptionBehavior",
                false,
                self.instance_interruption_behavior.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for LaunchTemplateSpotMarketOptionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateTagSpecification.
///
/// The tag specification for the launch template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateTagSpecification {
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl LaunchTemplateTagSpecification {
    /// Returns the `ResourceType` member.
    #[must_use]
    pub fn resource_type(&self) -> Option<&ResourceType> {
        self.resource_type.as_ref()
    }

    /// Sets the `ResourceType` member, replacing any previous value.
    pub fn set_resource_type(&mut self, resource_type: Option<ResourceType>) {
        self.resource_type = resource_type;
    }

    /// Sets the `ResourceType` member and returns the updated value.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: impl Into<ResourceType>) -> Self {
        self.resource_type = Some(resource_type.into());
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

impl Shape for LaunchTemplateTagSpecification {
    const SHAPE_NAME: &'static str = "LaunchTemplateTagSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ResourceType", false, self.resource_type.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateTagSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplateTagSpecificationRequest.
///
/// The tags specification for the launch template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplateTagSpecificationRequest {
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl LaunchTemplateTagSpecificationRequest {
    /// Returns the `ResourceType` member.
    #[must_use]
    pub fn resource_type(&self) -> Option<&ResourceType> {
        self.resource_type.as_ref()
    }

    /// Sets the `ResourceType` member, replacing any previous value.
    pub fn set_resource_type(&mut self, resource_type: Option<ResourceType>) {
        self.resource_type = resource_type;
    }

    /// Sets the `ResourceType` member and returns the updated value.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: impl Into<ResourceType>) -> Self {
        self.resource_type = Some(resource_type.into());
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

impl Shape for LaunchTemplateTagSpecificationRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplateTagSpecificationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ResourceType", false, self.resource_type.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplateTagSpecificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplatesMonitoring.
///
/// Describes the monitoring for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplatesMonitoring {
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl LaunchTemplatesMonitoring {
    /// Returns the `Enabled` member.
    #[must_use]
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Sets the `Enabled` member, replacing any previous value.
    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    /// Sets the `Enabled` member and returns the updated value.
    #[must_use]
    pub fn with_enabled(mut self, enabled: impl Into<bool>) -> Self {
        self.enabled = Some(enabled.into());
        self
    }
}

impl Shape for LaunchTemplatesMonitoring {
    const SHAPE_NAME: &'static str = "LaunchTemplatesMonitoring";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Enabled", false, self.enabled.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplatesMonitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LaunchTemplatesMonitoringRequest.
///
/// Describes the monitoring for the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchTemplatesMonitoringRequest {
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl LaunchTemplatesMonitoringRequest {
    /// Returns the `Enabled` member.
    #[must_use]
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Sets the `Enabled` member, replacing any previous value.
    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    /// Sets the `Enabled` member and returns the updated value.
    #[must_use]
    pub fn with_enabled(mut self, enabled: impl Into<bool>) -> Self {
        self.enabled = Some(enabled.into());
        self
    }
}

impl Shape for LaunchTemplatesMonitoringRequest {
    const SHAPE_NAME: &'static str = "LaunchTemplatesMonitoringRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Enabled", false, self.enabled.as_ref()),
        ]
    }
}

impl fmt::Display for LaunchTemplatesMonitoringRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LicenseConfiguration.
///
/// Describes a license configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseConfiguration {
    #[serde(rename = "LicenseConfigurationArn", skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl LicenseConfiguration {
    /// Returns the `LicenseConfigurationArn` member.
    #[must_use]
    pub fn license_configuration_arn(&self) -> Option<&str> {
        self.license_configuration_arn.as_deref()
    }

    /// Sets the `LicenseConfigurationArn` member, replacing any previous value.
    pub fn set_license_configuration_arn(&mut self, license_configuration_arn: Option<String>) {
        self.license_configuration_arn = license_configuration_arn;
    }

    /// Sets the `LicenseConfigurationArn` member and returns the updated value.
    #[must_use]
    pub fn with_license_configuration_arn(
        mut self,
        license_configuration_arn: impl Into<String>,
    ) -> Self {
        self.license_configuration_arn = Some(license_configuration_arn.into());
        self
    }
}

impl Shape for LicenseConfiguration {
    const SHAPE_NAME: &'static str = "LicenseConfiguration";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LicenseConfigurationArn", false, self.license_configuration_arn.as_ref()),
        ]
    }
}

impl fmt::Display for LicenseConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LicenseConfigurationRequest.
///
/// Describes a license configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseConfigurationRequest {
    #[serde(rename = "LicenseConfigurationArn", skip_serializing_if = "Option::is_none")]
    pub license_configuration_arn: Option<String>,
}

impl LicenseConfigurationRequest {
    /// Returns the `LicenseConfigurationArn` member.
    #[must_use]
    pub fn license_configuration_arn(&self) -> Option<&str> {
        self.license_configuration_arn.as_deref()
    }

    /// Sets the `LicenseConfigurationArn` member, replacing any previous value.
    pub fn set_license_configuration_arn(&mut self, license_configuration_arn: Option<String>) {
        self.license_configuration_arn = license_configuration_arn;
    }

    /// Sets the `LicenseConfigurationArn` member and returns the updated value.
    #[must_use]
    pub fn with_license_configuration_arn(
        mut self,
        license_configuration_arn: impl Into<String>,
    ) -> Self {
        self.license_configuration_arn = Some(license_configuration_arn.into());
        self
    }
}

impl Shape for LicenseConfigurationRequest {
    const SHAPE_NAME: &'static str = "LicenseConfigurationRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("LicenseConfigurationArn", false, self.license_configuration_arn.as_ref()),
        ]
    }
}

impl fmt::Display for LicenseConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 LoadBalancersConfig.
///
/// Describes the Classic Load Balancers and target groups to attach to a Spot Fleet request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadBalancersConfig {
    #[serde(rename = "ClassicLoadBalancersConfig", skip_serializing_if = "Option::is_none")]
    pub classic_load_balancers_config: Option<ClassicLoadBalancersConfig>,
    #[serde(rename = "TargetGroupsConfig", skip_serializing_if = "Option::is_none")]
    pub target_groups_config: Option<TargetGroupsConfig>,
}

impl LoadBalancersConfig {
    /// Returns the `ClassicLoadBalancersConfig` member.
    #[must_use]
    pub fn classic_load_balancers_config(&self) -> Option<&ClassicLoadBalancersConfig> {
        self.classic_load_balancers_config.as_ref()
    }

    /// Sets the `ClassicLoadBalancersConfig` member, replacing any previous value.
    pub fn set_classic_load_balancers_config(
        &mut self,
        classic_load_balancers_config: Option<ClassicLoadBalancersConfig>,
    ) {
        self.classic_load_balancers_config = classic_load_balancers_config;
    }

    /// Sets the `ClassicLoadBalancersConfig` member and returns the updated value.
    #[must_use]
    pub fn with_classic_load_balancers_config(
        mut self,
        classic_load_balancers_config: impl Into<ClassicLoadBalancersConfig>,
    ) -> Self {
        self.classic_load_balancers_config = Some(classic_load_balancers_config.into());
        self
    }

    /// Returns the `TargetGroupsConfig` member.
    #[must_use]
    pub fn target_groups_config(&self) -> Option<&TargetGroupsConfig> {
        self.target_groups_config.as_ref()
    }

    /// Sets the `TargetGroupsConfig` member, replacing any previous value.
    pub fn set_target_groups_config(&mut self, target_groups_config: Option<TargetGroupsConfig>) {
        self.target_groups_config = target_groups_config;
    }

    /// Sets the `TargetGroupsConfig` member and returns the updated value.
    #[must_use]
    pub fn with_target_groups_config(
        mut self,
        target_groups_config: impl Into<TargetGroupsConfig>,
    ) -> Self {
        self.target_groups_config = Some(target_groups_config.into());
        self
    }
}

impl Shape for LoadBalancersConfig {
    const SHAPE_NAME: &'static str = "LoadBalancersConfig";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "ClassicLoadBalancersConfig",
                false,
                self.classic_load_balancers_config.as_ref(),
            ),
            Member::new("TargetGroupsConfig", false, self.target_groups_config.as_ref()),
        ]
    }
}

impl fmt::Display for LoadBalancersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 MemoryInfo.
///
/// Describes the memory for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// The size of the memory, in MiB.
    #[serde(rename = "SizeInMiB", skip_serializing_if = "Option::is_none")]
    pub size_in_mi_b: Option<i64>,
}

impl MemoryInfo {
    /// Returns the `SizeInMiB` member.
    #[must_use]
    pub fn size_in_mi_b(&self) -> Option<i64> {
        self.size_in_mi_b
    }

    /// Sets the `SizeInMiB` member, replacing any previous value.
    pub fn set_size_in_mi_b(&mut self, size_in_mi_b: Option<i64>) {
        self.size_in_mi_b = size_in_mi_b;
    }

    /// Sets the `SizeInMiB` member and returns the updated value.
    #[must_use]
    pub fn with_size_in_mi_b(mut self, size_in_mi_b: impl Into<i64>) -> Self {
        self.size_in_mi_b = Some(size_in_mi_b.into());
        self
    }
}

impl Shape for MemoryInfo {
    const SHAPE_NAME: &'static str = "MemoryInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SizeInMiB", false, self.size_in_mi_b.as_ref()),
        ]
    }
}

impl fmt::Display for MemoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Monitoring.
///
/// Describes the monitoring of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monitoring {
    /// Indicates whether detailed monitoring is enabled.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<MonitoringState>,
}

impl Monitoring {
    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&MonitoringState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<MonitoringState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<MonitoringState>) -> Self {
        self.state = Some(state.into());
        self
    }
}

impl Shape for Monitoring {
    const SHAPE_NAME: &'static str = "Monitoring";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("State", false, self.state.as_ref()),
        ]
    }
}

impl fmt::Display for Monitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 NetworkInfo.
///
/// Describes the networking features of the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInfo {
    #[serde(rename = "NetworkPerformance", skip_serializing_if = "Option::is_none")]
    pub network_performance: Option<String>,
    #[serde(rename = "MaximumNetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub maximum_network_interfaces: Option<i32>,
    #[serde(rename = "Ipv4AddressesPerInterface", skip_serializing_if = "Option::is_none")]
    pub ipv4_addresses_per_interface: Option<i32>,
    #[serde(rename = "Ipv6AddressesPerInterface", skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses_per_interface: Option<i32>,
    #[serde(rename = "Ipv6Supported", skip_serializing_if = "Option::is_none")]
    pub ipv6_supported: Option<bool>,
    #[serde(rename = "EnaSupport", skip_serializing_if = "Option::is_none")]
    pub ena_support: Option<EnaSupport>,
    #[serde(rename = "EfaSupported", skip_serializing_if = "Option::is_none")]
    pub efa_supported: Option<bool>,
}

impl NetworkInfo {
    /// Returns the `NetworkPerformance` member.
    #[must_use]
    pub fn network_performance(&self) -> Option<&str> {
        self.network_performance.as_deref()
    }

    /// Sets the `NetworkPerformance` member, replacing any previous value.
    pub fn set_network_performance(&mut self, network_performance: Option<String>) {
        self.network_performance = network_performance;
    }

    /// Sets the `NetworkPerformance` member and returns the updated value.
    #[must_use]
    pub fn with_network_performance(mut self, network_performance: impl Into<String>) -> Self {
        self.network_performance = Some(network_performance.into());
        self
    }

    /// Returns the `MaximumNetworkInterfaces` member.
    #[must_use]
    pub fn maximum_network_interfaces(&self) -> Option<i32> {
        self.maximum_network_interfaces
    }

    /// Sets the `MaximumNetworkInterfaces` member, replacing any previous value.
    pub fn set_maximum_network_interfaces(&mut self, maximum_network_interfaces: Option<i32>) {
        self.maximum_network_interfaces = maximum_network_interfaces;
    }

    /// Sets the `MaximumNetworkInterfaces` member and returns the updated value.
    #[must_use]
    pub fn with_maximum_network_interfaces(
        mut self,
        maximum_network_interfaces: impl Into<i32>,
    ) -> Self {
        self.maximum_network_interfaces = Some(maximum_network_interfaces.into());
        self
    }

    /// Returns the `Ipv4AddressesPerInterface` member.
    #[must_use]
    pub fn ipv4_addresses_per_interface(&self) -> Option<i32> {
        self.ipv4_addresses_per_interface
    }

    /// Sets the `Ipv4AddressesPerInterface` member, replacing any previous value.
    pub fn set_ipv4_addresses_per_interface(&mut self, ipv4_addresses_per_interface: Option<i32>) {
        self.ipv4_addresses_per_interface = ipv4_addresses_per_interface;
    }

    /// Sets the `Ipv4AddressesPerInterface` member and returns the updated value.
    #[must_use]
    pub fn with_ipv4_addresses_per_interface(
        mut self,
        ipv4_addresses_per_interface: impl Into<i32>,
    ) -> Self {
        self.ipv4_addresses_per_interface = Some(ipv4_addresses_per_interface.into());
        self
    }

    /// Returns the `Ipv6AddressesPerInterface` member.
    #[must_use]
    pub fn ipv6_addresses_per_interface(&self) -> Option<i32> {
        self.ipv6_addresses_per_interface
    }

    /// Sets the `Ipv6AddressesPerInterface` member, replacing any previous value.
    pub fn set_ipv6_addresses_per_interface(&mut self, ipv6_addresses_per_interface: Option<i32>) {
        self.ipv6_addresses_per_interface = ipv6_addresses_per_interface;
    }

    /// Sets the `Ipv6AddressesPerInterface` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_addresses_per_interface(
        mut self,
        ipv6_addresses_per_interface: impl Into<i32>,
    ) -> Self {
        self.ipv6_addresses_per_interface = Some(ipv6_addresses_per_interface.into());
        self
    }

    /// Returns the `Ipv6Supported` member.
    #[must_use]
    pub fn ipv6_supported(&self) -> Option<bool> {
        self.ipv6_supported
    }

    /// Sets the `Ipv6Supported` member, replacing any previous value.
    pub fn set_ipv6_supported(&mut self, ipv6_supported: Option<bool>) {
        self.ipv6_supported = ipv6_supported;
    }

    /// Sets the `Ipv6Supported` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_supported(mut self, ipv6_supported: impl Into<bool>) -> Self {
        self.ipv6_supported = Some(ipv6_supported.into());
        self
    }

    /// Returns the `EnaSupport` member.
    #[must_use]
    pub fn ena_support(&self) -> Option<&EnaSupport> {
        self.ena_support.as_ref()
    }

    /// Sets the `EnaSupport` member, replacing any previous value.
    pub fn set_ena_support(&mut self, ena_support: Option<EnaSupport>) {
        self.ena_support = ena_support;
    }

    /// Sets the `EnaSupport` member and returns the updated value.
    #[must_use]
    pub fn with_ena_support(mut self, ena_support: impl Into<EnaSupport>) -> Self {
        self.ena_support = Some(ena_support.into());
        self
    }

    /// Returns the `EfaSupported` member.
    #[must_use]
    pub fn efa_supported(&self) -> Option<bool> {
        self.efa_supported
    }

    /// Sets the `EfaSupported` member, replacing any previous value.
    pub fn set_efa_supported(&mut self, efa_supported: Option<bool>) {
        self.efa_supported = efa_supported;
    }

    /// Sets the `EfaSupported` member and returns the updated value.
    #[must_use]
    pub fn with_efa_supported(mut self, efa_supported: impl Into<bool>) -> Self {
        self.efa_supported = Some(efa_supported.into());
        self
    }
}

impl Shape for NetworkInfo {
    const SHAPE_NAME: &'static str = "NetworkInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("NetworkPerformance", false, self.network_performance.as_ref()),
            Member::new(
                "MaximumNetworkInterfaces",
                false,
                self.maximum_network_interfaces.as_ref(),
            ),
            Member::new(
                "Ipv4AddressesPerInterface",
                false,
                self.ipv4_addresses_per_interface.as_ref(),
            ),
            Member::new(
                "Ipv6AddressesPerInterface",
                false,
                self.ipv6_addresses_per_interface.as_ref(),
            ),
            Member::new("Ipv6Supported", false, self.ipv6_supported.as_ref()),
            Member::new("EnaSupport", false, self.ena_support.as_ref()),
            Member::new("EfaSupported", false, self.efa_supported.as_ref()),
        ]
    }
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 NetworkInterface.
///
/// Describes a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInterface {
    #[serde(rename = "Association", skip_serializing_if = "Option::is_none")]
    pub association: Option<NetworkInterfaceAssociation>,
    /// The network interface attachment.
    #[serde(rename = "Attachment", skip_serializing_if = "Option::is_none")]
    pub attachment: Option<NetworkInterfaceAttachment>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "InterfaceType", skip_serializing_if = "Option::is_none")]
    pub interface_type: Option<NetworkInterfaceType>,
    #[serde(rename = "Ipv6Addresses", skip_serializing_if = "Option::is_none")]
    pub ipv6_addresses: Option<Vec<NetworkInterfaceIpv6Address>>,
    #[serde(rename = "MacAddress", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
    #[serde(rename = "OutpostArn", skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(rename = "PrivateIpAddresses", skip_serializing_if = "Option::is_none")]
    pub private_ip_addresses: Option<Vec<NetworkInterfacePrivateIpAddress>>,
    #[serde(rename = "RequesterId", skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<String>,
    #[serde(rename = "RequesterManaged", skip_serializing_if = "Option::is_none")]
    pub requester_managed: Option<bool>,
    #[serde(rename = "SourceDestCheck", skip_serializing_if = "Option::is_none")]
    pub source_dest_check: Option<bool>,
    /// The status of the network interface.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<NetworkInterfaceStatus>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "TagSet", skip_serializing_if = "Option::is_none")]
    pub tag_set: Option<Vec<Tag>>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

impl NetworkInterface {
    /// Returns the `Association` member.
    #[must_use]
    pub fn association(&self) -> Option<&NetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// Sets the `Association` member, replacing any previous value.
    pub fn set_association(&mut self, association: Option<NetworkInterfaceAssociation>) {
        self.association = association;
    }

    /// Sets the `Association` member and returns the updated value.
    #[must_use]
    pub fn with_association(mut self, association: impl Into<NetworkInterfaceAssociation>) -> Self {
        self.association = Some(association.into());
        self
    }

    /// Returns the `Attachment` member.
    #[must_use]
    pub fn attachment(&self) -> Option<&NetworkInterfaceAttachment> {
        self.attachment.as_ref()
    }

    /// Sets the `Attachment` member, replacing any previous value.
    pub fn set_attachment(&mut self, attachment: Option<NetworkInterfaceAttachment>) {
        self.attachment = attachment;
    }

    /// Sets the `Attachment` member and returns the updated value.
    #[must_use]
    pub fn with_attachment(mut self, attachment: impl Into<NetworkInterfaceAttachment>) -> Self {
        self.attachment = Some(attachment.into());
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

    /// Returns the `Groups` member.
    #[must_use]
    pub fn groups(&self) -> Option<&[GroupIdentifier]> {
        self.groups.as_deref()
    }

    /// Sets the `Groups` member, replacing any previous value.
    pub fn set_groups(&mut self, groups: Option<Vec<GroupIdentifier>>) {
        self.groups = groups;
    }

    /// Appends to the `Groups` member and returns the updated value.
    #[must_use]
    pub fn with_groups(
        mut self,
        groups: impl IntoIterator<Item = impl Into<GroupIdentifier>>,
    ) -> Self {
        self.groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `InterfaceType` member.
    #[must_use]
    pub fn interface_type(&self) -> Option<&NetworkInterfaceType> {
        self.interface_type.as_ref()
    }

    /// Sets the `InterfaceType` member, replacing any previous value.
    pub fn set_interface_type(&mut self, interface_type: Option<NetworkInterfaceType>) {
        self.interface_type = interface_type;
    }

    /// Sets the `InterfaceType` member and returns the updated value.
    #[must_use]
    pub fn with_interface_type(mut self, interface_type: impl Into<NetworkInterfaceType>) -> Self {
        self.interface_type = Some(interface_type.into());
        self
    }

    /// Returns the `Ipv6Addresses` member.
    #[must_use]
    pub fn ipv6_addresses(&self) -> Option<&[NetworkInterfaceIpv6Address]> {
        self.ipv6_addresses.as_deref()
    }

    /// Sets the `Ipv6Addresses` member, replacing any previous value.
    pub fn set_ipv6_addresses(&mut self, ipv6_addresses: Option<Vec<NetworkInterfaceIpv6Address>>) {
        self.ipv6_addresses = ipv6_addresses;
    }

    /// Appends to the `Ipv6Addresses` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_addresses(
        mut self,
        ipv6_addresses: impl IntoIterator<Item = impl Into<NetworkInterfaceIpv6Address>>,
    ) -> Self {
        self.ipv6_addresses
            .get_or_insert_with(Vec::new)
            .extend(ipv6_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `MacAddress` member.
    #[must_use]
    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    /// Sets the `MacAddress` member, replacing any previous value.
    pub fn set_mac_address(&mut self, mac_address: Option<String>) {
        self.mac_address = mac_address;
    }

    /// Sets the `MacAddress` member and returns the updated value.
    #[must_use]
    pub fn with_mac_address(mut self, mac_address: impl Into<String>) -> Self {
        self.mac_address = Some(mac_address.into());
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

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `PrivateDnsName` member.
    #[must_use]
    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// Sets the `PrivateDnsName` member, replacing any previous value.
    pub fn set_private_dns_name(&mut self, private_dns_name: Option<String>) {
        self.private_dns_name = private_dns_name;
    }

    /// Sets the `PrivateDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: impl Into<String>) -> Self {
        self.private_dns_name = Some(private_dns_name.into());
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

    /// Returns the `PrivateIpAddresses` member.
    #[must_use]
    pub fn private_ip_addresses(&self) -> Option<&[NetworkInterfacePrivateIpAddress]> {
        self.private_ip_addresses.as_deref()
    }

    /// Sets the `PrivateIpAddresses` member, replacing any previous value.
    pub fn set_private_ip_addresses(
        &mut self,
        private_ip_addresses: Option<Vec<NetworkInterfacePrivateIpAddress>>,
    ) {
        self.private_ip_addresses = private_ip_addresses;
    }

    /// Appends to the `PrivateIpAddresses` member and returns the updated value.
    #[must_use]
    pub fn with_private_ip_addresses(
        mut self,
        private_ip_addresses: impl IntoIterator<Item = impl Into<NetworkInterfacePrivateIpAddress>>,
    ) -> Self {
        self.private_ip_addresses
            .get_or_insert_with(Vec::new)
            .extend(private_ip_addresses.into_iter().map(Into::into));
        self
    }

    /// Returns the `RequesterId` member.
    #[must_use]
    pub fn requester_id(&self) -> Option<&str> {
        self.requester_id.as_deref()
    }

    /// Sets the `RequesterId` member, replacing any previous value.
    pub fn set_requester_id(&mut self, requester_id: Option<String>) {
        self.requester_id = requester_id;
    }

    /// Sets the `RequesterId` member and returns the updated value.
    #[must_use]
    pub fn with_requester_id(mut self, requester_id: impl Into<String>) -> Self {
        self.requester_id = Some(requester_id.into());
        self
    }

    /// Returns the `RequesterManaged` member.
    #[must_use]
    pub fn requester_managed(&self) -> Option<bool> {
        self.requester_managed
    }

    /// Sets the `RequesterManaged` member, replacing any previous value.
    pub fn set_requester_managed(&mut self, requester_managed: Option<bool>) {
        self.requester_managed = requester_managed;
    }

    /// Sets the `RequesterManaged` member and returns the updated value.
    #[must_use]
    pub fn with_requester_managed(mut self, requester_managed: impl Into<bool>) -> Self {
        self.requester_managed = Some(requester_managed.into());
        self
    }

    /// Returns the `SourceDestCheck` member.
    #[must_use]
    pub fn source_dest_check(&self) -> Option<bool> {
        self.source_dest_check
    }

    /// Sets the `SourceDestCheck` member, replacing any previous value.
    pub fn set_source_dest_check(&mut self, source_dest_check: Option<bool>) {
        self.source_dest_check = source_dest_check;
    }

    /// Sets the `SourceDestCheck` member and returns the updated value.
    #[must_use]
    pub fn with_source_dest_check(mut self, source_dest_check: impl Into<bool>) -> Self {
        self.source_dest_check = Some(source_dest_check.into());
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&NetworkInterfaceStatus> {
        self.status.as_ref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<NetworkInterfaceStatus>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<NetworkInterfaceStatus>) -> Self {
        self.status = Some(status.into());
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

    /// Returns the `TagSet` member.
    #[must_use]
    pub fn tag_set(&self) -> Option<&[Tag]> {
        self.tag_set.as_deref()
    }

    /// Sets the `TagSet` member, replacing any previous value.
    pub fn set_tag_set(&mut self, tag_set: Option<Vec<Tag>>) {
        self.tag_set = tag_set;
    }

    /// Appends to the `TagSet` member and returns the updated value.
    #[must_use]
    pub fn with_tag_set(mut self, tag_set: impl IntoIterator<Item = impl Into<Tag>>) -> Self {
        self.tag_set
            .get_or_insert_with(Vec::new)
            .extend(tag_set.into_iter().map(Into::into));
        self
    }

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }
}

impl Shape for NetworkInterface {
    const SHAPE_NAME: &'static str = "NetworkInterface";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Association", false, self.association.as_ref()),
            Member::new("Attachment", false, self.attachment.as_ref()),
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Description", false, self.description.as_ref()),
            Member::new("Groups", false, self.groups.as_ref()),
            Member::new("InterfaceType", false, self.interface_type.as_ref()),
            Member::new("Ipv6Addresses", false, self.ipv6_addresses.as_ref()),
            Member::new("MacAddress", false, self.mac_address.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("OutpostArn", false, self.outpost_arn.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("PrivateDnsName", false, self.private_dns_name.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
            Member::new("PrivateIpAddresses", false, self.private_ip_addresses.as_ref()),
            Member::new("RequesterId", false, self.requester_id.as_ref()),
            Member::new("RequesterManaged", false, self.requester_managed.as_ref()),
            Member::new("SourceDestCheck", false, self.source_dest_check.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("TagSet", false, self.tag_set.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
        ]
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 NetworkInterfaceAssociation.
///
/// Describes association information for an Elastic IP address (IPv4 only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInterfaceAssociation {
    #[serde(rename = "AllocationId", skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<String>,
    #[serde(rename = "AssociationId", skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(rename = "IpOwnerId", skip_serializing_if = "Option::is_none")]
    pub ip_owner_id: Option<String>,
    #[serde(rename = "PublicDnsName", skip_serializing_if = "Option::is_none")]
    pub public_dns_name: Option<String>,
    #[serde(rename = "PublicIp", skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

impl NetworkInterfaceAssociation {
    /// Returns the `AllocationId` member.
    #[must_use]
    pub fn allocation_id(&self) -> Option<&str> {
        self.allocation_id.as_deref()
    }

    /// Sets the `AllocationId` member, replacing any previous value.
    pub fn set_allocation_id(&mut self, allocation_id: Option<String>) {
        self.allocation_id = allocation_id;
    }

    /// Sets the `AllocationId` member and returns the updated value.
    #[must_use]
    pub fn with_allocation_id(mut self, allocation_id: impl Into<String>) -> Self {
        self.allocation_id = Some(allocation_id.into());
        self
    }

    /// Returns the `AssociationId` member.
    #[must_use]
    pub fn association_id(&self) -> Option<&str> {
        self.association_id.as_deref()
    }

    /// Sets the `AssociationId` member, replacing any previous value.
    pub fn set_association_id(&mut self, association_id: Option<String>) {
        self.association_id = association_id;
    }

    /// Sets the `AssociationId` member and returns the updated value.
    #[must_use]
    pub fn with_association_id(mut self, association_id: impl Into<String>) -> Self {
        self.association_id = Some(association_id.into());
        self
    }

    /// Returns the `IpOwnerId` member.
    #[must_use]
    pub fn ip_owner_id(&self) -> Option<&str> {
        self.ip_owner_id.as_deref()
    }

    /// Sets the `IpOwnerId` member, replacing any previous value.
    pub fn set_ip_owner_id(&mut self, ip_owner_id: Option<String>) {
        self.ip_owner_id = ip_owner_id;
    }

    /// Sets the `IpOwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_ip_owner_id(mut self, ip_owner_id: impl Into<String>) -> Self {
        self.ip_owner_id = Some(ip_owner_id.into());
        self
    }

    /// Returns the `PublicDnsName` member.
    #[must_use]
    pub fn public_dns_name(&self) -> Option<&str> {
        self.public_dns_name.as_deref()
    }

    /// Sets the `PublicDnsName` member, replacing any previous value.
    pub fn set_public_dns_name(&mut self, public_dns_name: Option<String>) {
        self.public_dns_name = public_dns_name;
    }

    /// Sets the `PublicDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_public_dns_name(mut self, public_dns_name: impl Into<String>) -> Self {
        self.public_dns_name = Some(public_dns_name.into());
        self
    }

    /// Returns the `PublicIp` member.
    #[must_use]
    pub fn public_ip(&self) -> Option<&str> {
        self.public_ip.as_deref()
    }

    /// Sets the `PublicIp` member, replacing any previous value.
    pub fn set_public_ip(&mut self, public_ip: Option<String>) {
        self.public_ip = public_ip;
    }

    /// Sets the `PublicIp` member and returns the updated value.
    #[must_use]
    pub fn with_public_ip(mut self, public_ip: impl Into<String>) -> Self {
        self.public_ip = Some(public_ip.into());
        self
    }
}

impl Shape for NetworkInterfaceAssociation {
    const SHAPE_NAME: &'static str = "NetworkInterfaceAssociation";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AllocationId", false, self.allocation_id.as_ref()),
            Member::new("AssociationId", false, self.association_id.as_ref()),
            Member::new("IpOwnerId", false, self.ip_owner_id.as_ref()),
            Member::new("PublicDnsName", false, self.public_dns_name.as_ref()),
            Member::new("PublicIp", false, self.public_ip.as_ref()),
        ]
    }
}

impl fmt::Display for NetworkInterfaceAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 NetworkInterfaceAttachment.
///
/// Describes a network interface attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInterfaceAttachment {
    #[serde(rename = "AttachTime", skip_serializing_if = "Option::is_none")]
    pub attach_time: Option<DateTime<Utc>>,
    #[serde(rename = "AttachmentId", skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(rename = "DeviceIndex", skip_serializing_if = "Option::is_none")]
    pub device_index: Option<i32>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "InstanceOwnerId", skip_serializing_if = "Option::is_none")]
    pub instance_owner_id: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<AttachmentStatus>,
}

impl NetworkInterfaceAttachment {
    /// Returns the `AttachTime` member.
    #[must_use]
    pub fn attach_time(&self) -> Option<&DateTime<Utc>> {
        self.attach_time.as_ref()
    }

    /// Sets the `AttachTime` member, replacing any previous value.
    pub fn set_attach_time(&mut self, attach_time: Option<DateTime<Utc>>) {
        self.attach_time = attach_time;
    }

    /// Sets the `AttachTime` member and returns the updated value.
    #[must_use]
    pub fn with_attach_time(mut self, attach_time: impl Into<DateTime<Utc>>) -> Self {
        self.attach_time = Some(attach_time.into());
        self
    }

    /// Returns the `AttachmentId` member.
    #[must_use]
    pub fn attachment_id(&self) -> Option<&str> {
        self.attachment_id.as_deref()
    }

    /// Sets the `AttachmentId` member, replacing any previous value.
    pub fn set_attachment_id(&mut self, attachment_id: Option<String>) {
        self.attachment_id = attachment_id;
    }

    /// Sets the `AttachmentId` member and returns the updated value.
    #[must_use]
    pub fn with_attachment_id(mut self, attachment_id: impl Into<String>) -> Self {
        self.attachment_id = Some(attachment_id.into());
        self
    }

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
        self
    }

    /// Returns the `DeviceIndex` member.
    #[must_use]
    pub fn device_index(&self) -> Option<i32> {
        self.device_index
    }

    /// Sets the `DeviceIndex` member, replacing any previous value.
    pub fn set_device_index(&mut self, device_index: Option<i32>) {
        self.device_index = device_index;
    }

    /// Sets the `DeviceIndex` member and returns the updated value.
    #[must_use]
    pub fn with_device_index(mut self, device_index: impl Into<i32>) -> Self {
        self.device_index = Some(device_index.into());
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

    /// Returns the `InstanceOwnerId` member.
    #[must_use]
    pub fn instance_owner_id(&self) -> Option<&str> {
        self.instance_owner_id.as_deref()
    }

    /// Sets the `InstanceOwnerId` member, replacing any previous value.
    pub fn set_instance_owner_id(&mut self, instance_owner_id: Option<String>) {
        self.instance_owner_id = instance_owner_id;
    }

    /// Sets the `InstanceOwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_instance_owner_id(mut self, instance_owner_id: impl Into<String>) -> Self {
        self.instance_owner_id = Some(instance_owner_id.into());
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&AttachmentStatus> {
        self.status.as_ref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<AttachmentStatus>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<AttachmentStatus>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Shape for NetworkInterfaceAttachment {
    const SHAPE_NAME: &'static str = "NetworkInterfaceAttachment";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AttachTime", false, self.attach_time.as_ref()),
            Member::new("AttachmentId", false, self.attachment_id.as_ref()),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
            Member::new("DeviceIndex", false, self.device_index.as_ref()),
            Member::new("InstanceId", false, self.instance_id.as_ref()),
            Member::new("InstanceOwnerId", false, self.instance_owner_id.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
        ]
    }
}

impl fmt::Display for NetworkInterfaceAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 NetworkInterfaceIpv6Address.
///
/// Describes an IPv6 address associated with a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInterfaceIpv6Address {
    #[serde(rename = "Ipv6Address", skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
}

impl NetworkInterfaceIpv6Address {
    /// Returns the `Ipv6Address` member.
    #[must_use]
    pub fn ipv6_address(&self) -> Option<&str> {
        self.ipv6_address.as_deref()
    }

    /// Sets the `Ipv6Address` member, replacing any previous value.
    pub fn set_ipv6_address(&mut self, ipv6_address: Option<String>) {
        self.ipv6_address = ipv6_address;
    }

    /// Sets the `Ipv6Address` member and returns the updated value.
    #[must_use]
    pub fn with_ipv6_address(mut self, ipv6_address: impl Into<String>) -> Self {
        self.ipv6_address = Some(ipv6_address.into());
        self
    }
}

impl Shape for NetworkInterfaceIpv6Address {
    const SHAPE_NAME: &'static str = "NetworkInterfaceIpv6Address";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Ipv6Address", false, self.ipv6_address.as_ref()),
        ]
    }
}

impl fmt::Display for NetworkInterfaceIpv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 NetworkInterfacePrivateIpAddress.
///
/// Describes the private IPv4 address of a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkInterfacePrivateIpAddress {
    #[serde(rename = "Association", skip_serializing_if = "Option::is_none")]
    pub association: Option<NetworkInterfaceAssociation>,
    #[serde(rename = "Primary", skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(rename = "PrivateDnsName", skip_serializing_if = "Option::is_none")]
    pub private_dns_name: Option<String>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

impl NetworkInterfacePrivateIpAddress {
    /// Returns the `Association` member.
    #[must_use]
    pub fn association(&self) -> Option<&NetworkInterfaceAssociation> {
        self.association.as_ref()
    }

    /// Sets the `Association` member, replacing any previous value.
    pub fn set_association(&mut self, association: Option<NetworkInterfaceAssociation>) {
        self.association = association;
    }

    /// Sets the `Association` member and returns the updated value.
    #[must_use]
    pub fn with_association(mut self, association: impl Into<NetworkInterfaceAssociation>) -> Self {
        self.association = Some(association.into());
        self
    }

    /// Returns the `Primary` member.
    #[must_use]
    pub fn primary(&self) -> Option<bool> {
        self.primary
    }

    /// Sets the `Primary` member, replacing any previous value.
    pub fn set_primary(&mut self, primary: Option<bool>) {
        self.primary = primary;
    }

    /// Sets the `Primary` member and returns the updated value.
    #[must_use]
    pub fn with_primary(mut self, primary: impl Into<bool>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    /// Returns the `PrivateDnsName` member.
    #[must_use]
    pub fn private_dns_name(&self) -> Option<&str> {
        self.private_dns_name.as_deref()
    }

    /// Sets the `PrivateDnsName` member, replacing any previous value.
    pub fn set_private_dns_name(&mut self, private_dns_name: Option<String>) {
        self.private_dns_name = private_dns_name;
    }

    /// Sets the `PrivateDnsName` member and returns the updated value.
    #[must_use]
    pub fn with_private_dns_name(mut self, private_dns_name: impl Into<String>) -> Self {
        self.private_dns_name = Some(private_dns_name.into());
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
}

impl Shape for NetworkInterfacePrivateIpAddress {
    const SHAPE_NAME: &'static str = "NetworkInterfacePrivateIpAddress";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Association", false, self.association.as_ref()),
            Member::new("Primary", false, self.primary.as_ref()),
            Member::new("PrivateDnsName", false, self.private_dns_name.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
        ]
    }
}

impl fmt::Display for NetworkInterfacePrivateIpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 OnDemandOptions.
///
/// Describes the configuration of On-Demand Instances in an EC2 Fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OnDemandOptions {
    #[serde(rename = "AllocationStrategy", skip_serializing_if = "Option::is_none")]
    pub allocation_strategy: Option<FleetOnDemandAllocationStrategy>,
    #[serde(rename = "CapacityReservationOptions", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_options: Option<CapacityReservationOptions>,
    #[serde(rename = "SingleInstanceType", skip_serializing_if = "Option::is_none")]
    pub single_instance_type: Option<bool>,
    #[serde(rename = "SingleAvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub single_availability_zone: Option<bool>,
    #[serde(rename = "MinTargetCapacity", skip_serializing_if = "Option::is_none")]
    pub min_target_capacity: Option<i32>,
    #[serde(rename = "MaxTotalPrice", skip_serializing_if = "Option::is_none")]
    pub max_total_price: Option<String>,
}

impl OnDemandOptions {
    /// Returns the `AllocationStrategy` member.
    #[must_use]
    pub fn allocation_strategy(&self) -> Option<&FleetOnDemandAllocationStrategy> {
        self.allocation_strategy.as_ref()
    }

    /// Sets the `AllocationStrategy` member, replacing any previous value.
    pub fn set_allocation_strategy(
        &mut self,
        allocation_strategy: Option<FleetOnDemandAllocationStrategy>,
    ) {
        self.allocation_strategy = allocation_strategy;
    }

    /// Sets the `AllocationStrategy` member and returns the updated value.
    #[must_use]
    pub fn with_allocation_strategy(
        mut self,
        allocation_strategy: impl Into<FleetOnDemandAllocationStrategy>,
    ) -> Self {
        self.allocation_strategy = Some(allocation_strategy.into());
        self
    }

    /// Returns the `CapacityReservationOptions` member.
    #[must_use]
    pub fn capacity_reservation_options(&self) -> Option<&CapacityReservationOptions> {
        self.capacity_reservation_options.as_ref()
    }

    /// Sets the `CapacityReservationOptions` member, replacing any previous value.
    pub fn set_capacity_reservation_options(
        &mut self,
        capacity_reservation_options: Option<CapacityReservationOptions>,
    ) {
        self.capacity_reservation_options = capacity_reservation_options;
    }

    /// Sets the `CapacityReservationOptions` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_options(
        mut self,
        capacity_reservation_options: impl Into<CapacityReservationOptions>,
    ) -> Self {
        self.capacity_reservation_options = Some(capacity_reservation_options.into());
        self
    }

    /// Returns the `SingleInstanceType` member.
    #[must_use]
    pub fn single_instance_type(&self) -> Option<bool> {
        self.single_instance_type
    }

    /// Sets the `SingleInstanceType` member, replacing any previous value.
    pub fn set_single_instance_type(&mut self, single_instance_type: Option<bool>) {
        self.single_instance_type = single_instance_type;
    }

    /// Sets the `SingleInstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_single_instance_type(mut self, single_instance_type: impl Into<bool>) -> Self {
        self.single_instance_type = Some(single_instance_type.into());
        self
    }

    /// Returns the `SingleAvailabilityZone` member.
    #[must_use]
    pub fn single_availability_zone(&self) -> Option<bool> {
        self.single_availability_zone
    }

    /// Sets the `SingleAvailabilityZone` member, replacing any previous value.
    pub fn set_single_availability_zone(&mut self, single_availability_zone: Option<bool>) {
        self.single_availability_zone = single_availability_zone;
    }

    /// Sets the `SingleAvailabilityZone` member and returns the updated value.
    #[must_use]
    pub fn with_single_availability_zone(
        mut self,
        single_availability_zone: impl Into<bool>,
    ) -> Self {
        self.single_availability_zone = Some(single_availability_zone.into());
        self
    }

    /// Returns the `MinTargetCapacity` member.
    #[must_use]
    pub fn min_target_capacity(&self) -> Option<i32> {
        self.min_target_capacity
    }

    /// Sets the `MinTargetCapacity` member, replacing any previous value.
    pub fn set_min_target_capacity(&mut self, min_target_capacity: Option<i32>) {
        self.min_target_capacity = min_target_capacity;
    }

    /// Sets the `MinTargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_min_target_capacity(mut self, min_target_capacity: impl Into<i32>) -> Self {
        self.min_target_capacity = Some(min_target_capacity.into());
        self
    }

    /// Returns the `MaxTotalPrice` member.
    #[must_use]
    pub fn max_total_price(&self) -> Option<&str> {
        self.max_total_price.as_deref()
    }

    /// Sets the `MaxTotalPrice` member, replacing any previous value.
    pub fn set_max_total_price(&mut self, max_total_price: Option<String>) {
        self.max_total_price = max_total_price;
    }

    /// Sets the `MaxTotalPrice` member and returns the updated value.
    #[must_use]
    pub fn with_max_total_price(mut self, max_total_price: impl Into<String>) -> Self {
        self.max_total_price = Some(max_total_price.into());
        self
    }
}

impl Shape for OnDemandOptions {
    const SHAPE_NAME: &'static str = "OnDemandOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AllocationStrategy", false, self.allocation_strategy.as_ref()),
            Member::new(
                "CapacityReservationOptions",
                false,
                self.capacity_reservation_options.as_ref(),
            ),
            Member::new("SingleInstanceType", false, self.single_instance_type.as_ref()),
            Member::new("SingleAvailabilityZone", false, self.single_availability_zone.as_ref()),
            Member::new("MinTargetCapacity", false, self.min_target_capacity.as_ref()),
            Member::new("MaxTotalPrice", false, self.max_total_price.as_ref()),
        ]
    }
}

impl fmt::Display for OnDemandOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PciId.
///
/// Describes the data that identifies an Amazon FPGA image (AFI) on the PCI bus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PciId {
    #[serde(rename = "DeviceId", skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(rename = "VendorId", skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(rename = "SubsystemId", skip_serializing_if = "Option::is_none")]
    pub subsystem_id: Option<String>,
    #[serde(rename = "SubsystemVendorId", skip_serializing_if = "Option::is_none")]
    pub subsystem_vendor_id: Option<String>,
}

impl PciId {
    /// Returns the `DeviceId` member.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// Sets the `DeviceId` member, replacing any previous value.
    pub fn set_device_id(&mut self, device_id: Option<String>) {
        self.device_id = device_id;
    }

    /// Sets the `DeviceId` member and returns the updated value.
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Returns the `VendorId` member.
    #[must_use]
    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    /// Sets the `VendorId` member, replacing any previous value.
    pub fn set_vendor_id(&mut self, vendor_id: Option<String>) {
        self.vendor_id = vendor_id;
    }

    /// Sets the `VendorId` member and returns the updated value.
    #[must_use]
    pub fn with_vendor_id(mut self, vendor_id: impl Into<String>) -> Self {
        self.vendor_id = Some(vendor_id.into());
        self
    }

    /// Returns the `SubsystemId` member.
    #[must_use]
    pub fn subsystem_id(&self) -> Option<&str> {
        self.subsystem_id.as_deref()
    }

    /// Sets the `SubsystemId` member, replacing any previous value.
    pub fn set_subsystem_id(&mut self, subsystem_id: Option<String>) {
        self.subsystem_id = subsystem_id;
    }

    /// Sets the `SubsystemId` member and returns the updated value.
    #[must_use]
    pub fn with_subsystem_id(mut self, subsystem_id: impl Into<String>) -> Self {
        self.subsystem_id = Some(subsystem_id.into());
        self
    }

    /// Returns the `SubsystemVendorId` member.
    #[must_use]
    pub fn subsystem_vendor_id(&self) -> Option<&str> {
        self.subsystem_vendor_id.as_deref()
    }

    /// Sets the `SubsystemVendorId` member, replacing any previous value.
    pub fn set_subsystem_vendor_id(&mut self, subsystem_vendor_id: Option<String>) {
        self.subsystem_vendor_id = subsystem_vendor_id;
    }

    /// Sets the `SubsystemVendorId` member and returns the updated value.
    #[must_use]
    pub fn with_subsystem_vendor_id(mut self, subsystem_vendor_id: impl Into<String>) -> Self {
        self.subsystem_vendor_id = Some(subsystem_vendor_id.into());
        self
    }
}

impl Shape for PciId {
    const SHAPE_NAME: &'static str = "PciId";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DeviceId", false, self.device_id.as_ref()),
            Member::new("VendorId", false, self.vendor_id.as_ref()),
            Member::new("SubsystemId", false, self.subsystem_id.as_ref()),
            Member::new("SubsystemVendorId", false, self.subsystem_vendor_id.as_ref()),
        ]
    }
}

impl fmt::Display for PciId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Phase1DHGroupNumbersRequestListValue.
///
/// Specifies a Diffie-Hellman group number for the VPN tunnel for phase 1 IKE negotiations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase1DHGroupNumbersRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl Phase1DHGroupNumbersRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<i32>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<i32>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Phase1DHGroupNumbersRequestListValue {
    const SHAPE_NAME: &'static str = "Phase1DHGroupNumbersRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Phase1DHGroupNumbersRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Phase1EncryptionAlgorithmsRequestListValue.
///
/// Specifies the encryption algorithm for the VPN tunnel for phase 1 IKE negotiations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase1EncryptionAlgorithmsRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Phase1EncryptionAlgorithmsRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Phase1EncryptionAlgorithmsRequestListValue {
    const SHAPE_NAME: &'static str = "Phase1EncryptionAlgorithmsRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Phase1EncryptionAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Phase1IntegrityAlgorithmsRequestListValue.
///
/// Specifies the integrity algorithm for the VPN tunnel for phase 1 IKE negotiations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase1IntegrityAlgorithmsRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Phase1IntegrityAlgorithmsRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Phase1IntegrityAlgorithmsRequestListValue {
    const SHAPE_NAME: &'static str = "Phase1IntegrityAlgorithmsRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Phase1IntegrityAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Phase2DHGroupNumbersRequestListValue.
///
/// Specifies a Diffie-Hellman group number for the VPN tunnel for phase 2 IKE negotiations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase2DHGroupNumbersRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl Phase2DHGroupNumbersRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<i32>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<i32>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Phase2DHGroupNumbersRequestListValue {
    const SHAPE_NAME: &'static str = "Phase2DHGroupNumbersRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Phase2DHGroupNumbersRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Phase2EncryptionAlgorithmsRequestListValue.
///
/// Specifies the encryption algorithm for the VPN tunnel for phase 2 IKE negotiations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase2EncryptionAlgorithmsRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Phase2EncryptionAlgorithmsRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Phase2EncryptionAlgorithmsRequestListValue {
    const SHAPE_NAME: &'static str = "Phase2EncryptionAlgorithmsRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Phase2EncryptionAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Phase2IntegrityAlgorithmsRequestListValue.
///
/// Specifies the integrity algorithm for the VPN tunnel for phase 2 IKE negotiations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase2IntegrityAlgorithmsRequestListValue {
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Phase2IntegrityAlgorithmsRequestListValue {
    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Phase2IntegrityAlgorithmsRequestListValue {
    const SHAPE_NAME: &'static str = "Phase2IntegrityAlgorithmsRequestListValue";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Phase2IntegrityAlgorithmsRequestListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Placement.
///
/// Describes the placement of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "Affinity", skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "PartitionNumber", skip_serializing_if = "Option::is_none")]
    pub partition_number: Option<i32>,
    #[serde(rename = "HostId", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Tenancy>,
    #[serde(rename = "SpreadDomain", skip_serializing_if = "Option::is_none")]
    pub spread_domain: Option<String>,
    #[serde(rename = "HostResourceGroupArn", skip_serializing_if = "Option::is_none")]
    pub host_resource_group_arn: Option<String>,
}

impl Placement {
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

    /// Returns the `Affinity` member.
    #[must_use]
    pub fn affinity(&self) -> Option<&str> {
        self.affinity.as_deref()
    }

    /// Sets the `Affinity` member, replacing any previous value.
    pub fn set_affinity(&mut self, affinity: Option<String>) {
        self.affinity = affinity;
    }

    /// Sets the `Affinity` member and returns the updated value.
    #[must_use]
    pub fn with_affinity(mut self, affinity: impl Into<String>) -> Self {
        self.affinity = Some(affinity.into());
        self
    }

    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `PartitionNumber` member.
    #[must_use]
    pub fn partition_number(&self) -> Option<i32> {
        self.partition_number
    }

    /// Sets the `PartitionNumber` member, replacing any previous value.
    pub fn set_partition_number(&mut self, partition_number: Option<i32>) {
        self.partition_number = partition_number;
    }

    /// Sets the `PartitionNumber` member and returns the updated value.
    #[must_use]
    pub fn with_partition_number(mut self, partition_number: impl Into<i32>) -> Self {
        self.partition_number = Some(partition_number.into());
        self
    }

    /// Returns the `HostId` member.
    #[must_use]
    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    /// Sets the `HostId` member, replacing any previous value.
    pub fn set_host_id(&mut self, host_id: Option<String>) {
        self.host_id = host_id;
    }

    /// Sets the `HostId` member and returns the updated value.
    #[must_use]
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }

    /// Returns the `Tenancy` member.
    #[must_use]
    pub fn tenancy(&self) -> Option<&Tenancy> {
        self.tenancy.as_ref()
    }

    /// Sets the `Tenancy` member, replacing any previous value.
    pub fn set_tenancy(&mut self, tenancy: Option<Tenancy>) {
        self.tenancy = tenancy;
    }

    /// Sets the `Tenancy` member and returns the updated value.
    #[must_use]
    pub fn with_tenancy(mut self, tenancy: impl Into<Tenancy>) -> Self {
        self.tenancy = Some(tenancy.into());
        self
    }

    /// Returns the `SpreadDomain` member.
    #[must_use]
    pub fn spread_domain(&self) -> Option<&str> {
        self.spread_domain.as_deref()
    }

    /// Sets the `SpreadDomain` member, replacing any previous value.
    pub fn set_spread_domain(&mut self, spread_domain: Option<String>) {
        self.spread_domain = spread_domain;
    }

    /// Sets the `SpreadDomain` member and returns the updated value.
    #[must_use]
    pub fn with_spread_domain(mut self, spread_domain: impl Into<String>) -> Self {
        self.spread_domain = Some(spread_domain.into());
        self
    }

    /// Returns the `HostResourceGroupArn` member.
    #[must_use]
    pub fn host_resource_group_arn(&self) -> Option<&str> {
        self.host_resource_group_arn.as_deref()
    }

    /// Sets the `HostResourceGroupArn` member, replacing any previous value.
    pub fn set_host_resource_group_arn(&mut self, host_resource_group_arn: Option<String>) {
        self.host_resource_group_arn = host_resource_group_arn;
    }

    /// Sets the `HostResourceGroupArn` member and returns the updated value.
    #[must_use]
    pub fn with_host_resource_group_arn(
        mut self,
        host_resource_group_arn: impl Into<String>,
    ) -> Self {
        self.host_resource_group_arn = Some(host_resource_group_arn.into());
        self
    }
}

impl Shape for Placement {
    const SHAPE_NAME: &'static str = "Placement";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Affinity", false, self.affinity.as_ref()),
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("PartitionNumber", false, self.partition_number.as_ref()),
            Member::new("HostId", false, self.host_id.as_ref()),
            Member::new("Tenancy", false, self.tenancy.as_ref()),
            Member::new("SpreadDomain", false, self.spread_domain.as_ref()),
            Member::new("HostResourceGroupArn", false, self.host_resource_group_arn.as_ref()),
        ]
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PlacementGroupInfo.
///
/// Describes the placement group support of the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementGroupInfo {
    #[serde(rename = "SupportedStrategies", skip_serializing_if = "Option::is_none")]
    pub supported_strategies: Option<Vec<PlacementGroupStrategy>>,
}

impl PlacementGroupInfo {
    /// Returns the `SupportedStrategies` member.
    #[must_use]
    pub fn supported_strategies(&self) -> Option<&[PlacementGroupStrategy]> {
        self.supported_strategies.as_deref()
    }

    /// Sets the `SupportedStrategies` member, replacing any previous value.
    pub fn set_supported_strategies(
        &mut self,
        supported_strategies: Option<Vec<PlacementGroupStrategy>>,
    ) {
        self.supported_strategies = supported_strategies;
    }

    /// Appends to the `SupportedStrategies` member and returns the updated value.
    #[must_use]
    pub fn with_supported_strategies(
        mut self,
        supported_strategies: impl IntoIterator<Item = impl Into<PlacementGroupStrategy>>,
    ) -> Self {
        self.supported_strategies
            .get_or_insert_with(Vec::new)
            .extend(supported_strategies.into_iter().map(Into::into));
        self
    }
}

impl Shape for PlacementGroupInfo {
    const SHAPE_NAME: &'static str = "PlacementGroupInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SupportedStrategies", false, self.supported_strategies.as_ref()),
        ]
    }
}

impl fmt::Display for PlacementGroupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PlacementResponse.
///
/// Describes the placement of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementResponse {
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl PlacementResponse {
    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }
}

impl Shape for PlacementResponse {
    const SHAPE_NAME: &'static str = "PlacementResponse";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("GroupName", false, self.group_name.as_ref()),
        ]
    }
}

impl fmt::Display for PlacementResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PrefixListId.
///
/// Describes a prefix list ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixListId {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "PrefixListId", skip_serializing_if = "Option::is_none")]
    pub prefix_list_id: Option<String>,
}

impl PrefixListId {
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

    /// Returns the `PrefixListId` member.
    #[must_use]
    pub fn prefix_list_id(&self) -> Option<&str> {
        self.prefix_list_id.as_deref()
    }

    /// Sets the `PrefixListId` member, replacing any previous value.
    pub fn set_prefix_list_id(&mut self, prefix_list_id: Option<String>) {
        self.prefix_list_id = prefix_list_id;
    }

    /// Sets the `PrefixListId` member and returns the updated value.
    #[must_use]
    pub fn with_prefix_list_id(mut self, prefix_list_id: impl Into<String>) -> Self {
        self.prefix_list_id = Some(prefix_list_id.into());
        self
    }
}

impl Shape for PrefixListId {
    const SHAPE_NAME: &'static str = "PrefixListId";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Description", false, self.description.as_ref()),
            Member::new("PrefixListId", false, self.prefix_list_id.as_ref()),
        ]
    }
}

impl fmt::Display for PrefixListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PricingDetail.
///
/// Describes a Reserved Instance offering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingDetail {
    #[serde(rename = "Count", skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(rename = "Price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl PricingDetail {
    /// Returns the `Count` member.
    #[must_use]
    pub fn count(&self) -> Option<i32> {
        self.count
    }

    /// Sets the `Count` member, replacing any previous value.
    pub fn set_count(&mut self, count: Option<i32>) {
        self.count = count;
    }

    /// Sets the `Count` member and returns the updated value.
    #[must_use]
    pub fn with_count(mut self, count: impl Into<i32>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Returns the `Price` member.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Sets the `Price` member, replacing any previous value.
    pub fn set_price(&mut self, price: Option<f64>) {
        self.price = price;
    }

    /// Sets the `Price` member and returns the updated value.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<f64>) -> Self {
        self.price = Some(price.into());
        self
    }
}

impl Shape for PricingDetail {
    const SHAPE_NAME: &'static str = "PricingDetail";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Count", false, self.count.as_ref()),
            Member::new("Price", false, self.price.as_ref()),
        ]
    }
}

impl PartialEq for PricingDetail {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for PricingDetail {}

impl Hash for PricingDetail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for PricingDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PrivateIpAddressSpecification.
///
/// Describes a secondary private IPv4 address for a network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivateIpAddressSpecification {
    /// Indicates whether the private IPv4 address is the primary private IPv4 address.
    #[serde(rename = "Primary", skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
}

impl PrivateIpAddressSpecification {
    /// Returns the `Primary` member.
    #[must_use]
    pub fn primary(&self) -> Option<bool> {
        self.primary
    }

    /// Sets the `Primary` member, replacing any previous value.
    pub fn set_primary(&mut self, primary: Option<bool>) {
        self.primary = primary;
    }

    /// Sets the `Primary` member and returns the updated value.
    #[must_use]
    pub fn with_primary(mut self, primary: impl Into<bool>) -> Self {
        self.primary = Some(primary.into());
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
}

impl Shape for PrivateIpAddressSpecification {
    const SHAPE_NAME: &'static str = "PrivateIpAddressSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Primary", false, self.primary.as_ref()),
            Member::new("PrivateIpAddress", false, self.private_ip_address.as_ref()),
        ]
    }
}

impl fmt::Display for PrivateIpAddressSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ProcessorInfo.
///
/// Describes the processor used by the instance type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorInfo {
    #[serde(rename = "SupportedArchitectures", skip_serializing_if = "Option::is_none")]
    pub supported_architectures: Option<Vec<ArchitectureType>>,
    /// The speed of the processor, in GHz.
    #[serde(rename = "SustainedClockSpeedInGhz", skip_serializing_if = "Option::is_none")]
    pub sustained_clock_speed_in_ghz: Option<f64>,
}

impl ProcessorInfo {
    /// Returns the `SupportedArchitectures` member.
    #[must_use]
    pub fn supported_architectures(&self) -> Option<&[ArchitectureType]> {
        self.supported_architectures.as_deref()
    }

    /// Sets the `SupportedArchitectures` member, replacing any previous value.
    pub fn set_supported_architectures(
        &mut self,
        supported_architectures: Option<Vec<ArchitectureType>>,
    ) {
        self.supported_architectures = supported_architectures;
    }

    /// Appends to the `SupportedArchitectures` member and returns the updated value.
    #[must_use]
    pub fn with_supported_architectures(
        mut self,
        supported_architectures: impl IntoIterator<Item = impl Into<ArchitectureType>>,
    ) -> Self {
        self.supported_architectures
            .get_or_insert_with(Vec::new)
            .extend(supported_architectures.into_iter().map(Into::into));
        self
    }

    /// Returns the `SustainedClockSpeedInGhz` member.
    #[must_use]
    pub fn sustained_clock_speed_in_ghz(&self) -> Option<f64> {
        self.sustained_clock_speed_in_ghz
    }

    /// Sets the `SustainedClockSpeedInGhz` member, replacing any previous value.
    pub fn set_sustained_clock_speed_in_ghz(&mut self, sustained_clock_speed_in_ghz: Option<f64>) {
        self.sustained_clock_speed_in_ghz = sustained_clock_speed_in_ghz;
    }

    /// Sets the `SustainedClockSpeedInGhz` member and returns the updated value.
    #[must_use]
    pub fn with_sustained_clock_speed_in_ghz(
        mut self,
        sustained_clock_speed_in_ghz: impl Into<f64>,
    ) -> Self {
        self.sustained_clock_speed_in_ghz = Some(sustained_clock_speed_in_ghz.into());
        self
    }
}

impl Shape for ProcessorInfo {
    const SHAPE_NAME: &'static str = "ProcessorInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SupportedArchitectures", false, self.supported_architectures.as_ref()),
            Member::new(
                "SustainedClockSpeedInGhz",
                false,
                self.sustained_clock_speed_in_ghz.as_ref(),
            ),
        ]
    }
}

impl PartialEq for ProcessorInfo {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for ProcessorInfo {}

impl Hash for ProcessorInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for ProcessorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ProductCode.
///
/// Describes a product code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCode {
    /// The product code.
    #[serde(rename = "ProductCodeId", skip_serializing_if = "Option::is_none")]
    pub product_code_id: Option<String>,
    /// The type of product code.
    #[serde(rename = "ProductCodeType", skip_serializing_if = "Option::is_none")]
    pub product_code_type: Option<ProductCodeValues>,
}

impl ProductCode {
    /// Returns the `ProductCodeId` member.
    #[must_use]
    pub fn product_code_id(&self) -> Option<&str> {
        self.product_code_id.as_deref()
    }

    /// Sets the `ProductCodeId` member, replacing any previous value.
    pub fn set_product_code_id(&mut self, product_code_id: Option<String>) {
        self.product_code_id = product_code_id;
    }

    /// Sets the `ProductCodeId` member and returns the updated value.
    #[must_use]
    pub fn with_product_code_id(mut self, product_code_id: impl Into<String>) -> Self {
        self.product_code_id = Some(product_code_id.into());
        self
    }

    /// Returns the `ProductCodeType` member.
    #[must_use]
    pub fn product_code_type(&self) -> Option<&ProductCodeValues> {
        self.product_code_type.as_ref()
    }

    /// Sets the `ProductCodeType` member, replacing any previous value.
    pub fn set_product_code_type(&mut self, product_code_type: Option<ProductCodeValues>) {
        self.product_code_type = product_code_type;
    }

    /// Sets the `ProductCodeType` member and returns the updated value.
    #[must_use]
    pub fn with_product_code_type(
        mut self,
        product_code_type: impl Into<ProductCodeValues>,
    ) -> Self {
        self.product_code_type = Some(product_code_type.into());
        self
    }
}

impl Shape for ProductCode {
    const SHAPE_NAME: &'static str = "ProductCode";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ProductCodeId", false, self.product_code_id.as_ref()),
            Member::new("ProductCodeType", false, self.product_code_type.as_ref()),
        ]
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 PropagatingVgw.
///
/// Describes a virtual private gateway propagating route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropagatingVgw {
    #[serde(rename = "GatewayId", skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
}

impl PropagatingVgw {
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
}

impl Shape for PropagatingVgw {
    const SHAPE_NAME: &'static str = "PropagatingVgw";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("GatewayId", false, self.gateway_id.as_ref()),
        ]
    }
}

impl fmt::Display for PropagatingVgw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RecurringCharge.
///
/// Describes a recurring charge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecurringCharge {
    /// The amount of the recurring charge.
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "Frequency", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<RecurringChargeFrequency>,
}

impl RecurringCharge {
    /// Returns the `Amount` member.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Sets the `Amount` member, replacing any previous value.
    pub fn set_amount(&mut self, amount: Option<f64>) {
        self.amount = amount;
    }

    /// Sets the `Amount` member and returns the updated value.
    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<f64>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Returns the `Frequency` member.
    #[must_use]
    pub fn frequency(&self) -> Option<&RecurringChargeFrequency> {
        self.frequency.as_ref()
    }

    /// Sets the `Frequency` member, replacing any previous value.
    pub fn set_frequency(&mut self, frequency: Option<RecurringChargeFrequency>) {
        self.frequency = frequency;
    }

    /// Sets the `Frequency` member and returns the updated value.
    #[must_use]
    pub fn with_frequency(mut self, frequency: impl Into<RecurringChargeFrequency>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }
}

impl Shape for RecurringCharge {
    const SHAPE_NAME: &'static str = "RecurringCharge";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Amount", false, self.amount.as_ref()),
            Member::new("Frequency", false, self.frequency.as_ref()),
        ]
    }
}

impl PartialEq for RecurringCharge {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for RecurringCharge {}

impl Hash for RecurringCharge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for RecurringCharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RequestLaunchTemplateData.
///
/// The information to include in the launch template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestLaunchTemplateData {
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<LaunchTemplateIamInstanceProfileSpecificationRequest>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<LaunchTemplateBlockDeviceMappingRequest>>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>>,
    /// The ID of the AMI.
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// The instance type.
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<LaunchTemplatesMonitoringRequest>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<LaunchTemplatePlacementRequest>,
    #[serde(rename = "RamDiskId", skip_serializing_if = "Option::is_none")]
    pub ram_disk_id: Option<String>,
    #[serde(rename = "DisableApiTermination", skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
    #[serde(rename = "InstanceInitiatedShutdownBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_initiated_shutdown_behavior: Option<ShutdownBehavior>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<LaunchTemplateTagSpecificationRequest>>,
    #[serde(rename = "ElasticGpuSpecifications", skip_serializing_if = "Option::is_none")]
    pub elastic_gpu_specifications: Option<Vec<ElasticGpuSpecification>>,
    #[serde(rename = "ElasticInferenceAccelerators", skip_serializing_if = "Option::is_none")]
    pub elastic_inference_accelerators: Option<Vec<LaunchTemplateElasticInferenceAccelerator>>,
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(rename = "InstanceMarketOptions", skip_serializing_if = "Option::is_none")]
    pub instance_market_options: Option<LaunchTemplateInstanceMarketOptionsRequest>,
    #[serde(rename = "CreditSpecification", skip_serializing_if = "Option::is_none")]
    pub credit_specification: Option<CreditSpecificationRequest>,
    #[serde(rename = "CpuOptions", skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<LaunchTemplateCpuOptionsRequest>,
    #[serde(rename = "CapacityReservationSpecification", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_specification: Option<LaunchTemplateCapacityReservationSpecificationRequest>,
    #[serde(rename = "LicenseSpecifications", skip_serializing_if = "Option::is_none")]
    pub license_specifications: Option<Vec<LaunchTemplateLicenseConfigurationRequest>>,
    #[serde(rename = "HibernationOptions", skip_serializing_if = "Option::is_none")]
    pub hibernation_options: Option<LaunchTemplateHibernationOptionsRequest>,
    #[serde(rename = "MetadataOptions", skip_serializing_if = "Option::is_none")]
    pub metadata_options: Option<LaunchTemplateInstanceMetadataOptionsRequest>,
}

impl RequestLaunchTemplateData {
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
    pub fn iam_instance_profile(
        &self,
    ) -> Option<&LaunchTemplateIamInstanceProfileSpecificationRequest> {
        self.iam_instance_profile.as_ref()
    }

    /// Sets the `IamInstanceProfile` member, replacing any previous value.
    pub fn set_iam_instance_profile(
        &mut self,
        iam_instance_profile: Option<LaunchTemplateIamInstanceProfileSpecificationRequest>,
    ) {
        self.iam_instance_profile = iam_instance_profile;
    }

    /// Sets the `IamInstanceProfile` member and returns the updated value.
    #[must_use]
    pub fn with_iam_instance_profile(
        mut self,
        iam_instance_profile: impl Into<LaunchTemplateIamInstanceProfileSpecificationRequest>,
    ) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile.into());
        self
    }

    /// Returns the `BlockDeviceMappings` member.
    #[must_use]
    pub fn block_device_mappings(&self) -> Option<&[LaunchTemplateBlockDeviceMappingRequest]> {
        self.block_device_mappings.as_deref()
    }

    /// Sets the `BlockDeviceMappings` member, replacing any previous value.
    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Option<Vec<LaunchTemplateBlockDeviceMappingRequest>>,
    ) {
        self.block_device_mappings = block_device_mappings;
    }

    /// Appends to the `BlockDeviceMappings` member and returns the updated value.
    #[must_use]
    pub fn with_block_device_mappings(
        mut self,
        block_device_mappings: impl IntoIterator<Item = impl Into<LaunchTemplateBlockDeviceMappingRequest>>,
    ) -> Self {
        self.block_device_mappings
            .get_or_insert_with(Vec::new)
            .extend(block_device_mappings.into_iter().map(Into::into));
        self
    }

    /// Returns the `NetworkInterfaces` member.
    #[must_use]
    pub fn network_interfaces(
        &self,
    ) -> Option<&[LaunchTemplateInstanceNetworkInterfaceSpecificationRequest]> {
        self.network_interfaces.as_deref()
    }

    /// Sets the `NetworkInterfaces` member, replacing any previous value.
    pub fn set_network_interfaces(
        &mut self,
        network_interfaces: Option<Vec<LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>>,
    ) {
        self.network_interfaces = network_interfaces;
    }

    /// Appends to the `NetworkInterfaces` member and returns the updated value.
    #[must_use]
    pub fn with_network_interfaces(
        mut self,
        network_interfaces: impl IntoIterator<Item = impl Into<LaunchTemplateInstanceNetworkInterfaceSpecificationRequest>>,
    ) -> Self {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .extend(network_interfaces.into_iter().map(Into::into));
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

    /// Returns the `Monitoring` member.
    #[must_use]
    pub fn monitoring(&self) -> Option<&LaunchTemplatesMonitoringRequest> {
        self.monitoring.as_ref()
    }

    /// Sets the `Monitoring` member, replacing any previous value.
    pub fn set_monitoring(&mut self, monitoring: Option<LaunchTemplatesMonitoringRequest>) {
        self.monitoring = monitoring;
    }

    /// Sets the `Monitoring` member and returns the updated value.
    #[must_use]
    pub fn with_monitoring(
        mut self,
        monitoring: impl Into<LaunchTemplatesMonitoringRequest>,
    ) -> Self {
        self.monitoring = Some(monitoring.into());
        self
    }

    /// Returns the `Placement` member.
    #[must_use]
    pub fn placement(&self) -> Option<&LaunchTemplatePlacementRequest> {
        self.placement.as_ref()
    }

    /// Sets the `Placement` member, replacing any previous value.
    pub fn set_placement(&mut self, placement: Option<LaunchTemplatePlacementRequest>) {
        self.placement = placement;
    }

    /// Sets the `Placement` member and returns the updated value.
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<LaunchTemplatePlacementRequest>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Returns the `RamDiskId` member.
    #[must_use]
    pub fn ram_disk_id(&self) -> Option<&str> {
        self.ram_disk_id.as_deref()
    }

    /// Sets the `RamDiskId` member, replacing any previous value.
    pub fn set_ram_disk_id(&mut self, ram_disk_id: Option<String>) {
        self.ram_disk_id = ram_disk_id;
    }

    /// Sets the `RamDiskId` member and returns the updated value.
    #[must_use]
    pub fn with_ram_disk_id(mut self, ram_disk_id: impl Into<String>) -> Self {
        self.ram_disk_id = Some(ram_disk_id.into());
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

    /// Returns the `TagSpecifications` member.
    #[must_use]
    pub fn tag_specifications(&self) -> Option<&[LaunchTemplateTagSpecificationRequest]> {
        self.tag_specifications.as_deref()
    }

    /// Sets the `TagSpecifications` member, replacing any previous value.
    pub fn set_tag_specifications(
        &mut self,
        tag_specifications: Option<Vec<LaunchTemplateTagSpecificationRequest>>,
    ) {
        self.tag_specifications = tag_specifications;
    }

    /// Appends to the `TagSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_tag_specifications(
        mut self,
        tag_specifications: impl IntoIterator<Item = impl Into<LaunchTemplateTagSpecificationRequest>>,
    ) -> Self {
        self.tag_specifications
            .get_or_insert_with(Vec::new)
            .extend(tag_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `ElasticGpuSpecifications` member.
    #[must_use]
    pub fn elastic_gpu_specifications(&self) -> Option<&[ElasticGpuSpecification]> {
        self.elastic_gpu_specifications.as_deref()
    }

    /// Sets the `ElasticGpuSpecifications` member, replacing any previous value.
    pub fn set_elastic_gpu_specifications(
        &mut self,
        elastic_gpu_specifications: Option<Vec<ElasticGpuSpecification>>,
    ) {
        self.elastic_gpu_specifications = elastic_gpu_specifications;
    }

    /// Appends to the `ElasticGpuSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_elastic_gpu_specifications(
        mut self,
        elastic_gpu_specifications: impl IntoIterator<Item = impl Into<ElasticGpuSpecification>>,
    ) -> Self {
        self.elastic_gpu_specifications
            .get_or_insert_with(Vec::new)
            .extend(elastic_gpu_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `ElasticInferenceAccelerators` member.
    #[must_use]
    pub fn elastic_inference_accelerators(
        &self,
    ) -> Option<&[LaunchTemplateElasticInferenceAccelerator]> {
        self.elastic_inference_accelerators.as_deref()
    }

    /// Sets the `ElasticInferenceAccelerators` member, replacing any previous value.
    pub fn set_elastic_inference_accelerators(
        &mut self,
        elastic_inference_accelerators: Option<Vec<LaunchTemplateElasticInferenceAccelerator>>,
    ) {
        self.elastic_inference_accelerators = elastic_inference_accelerators;
    }

    /// Appends to the `ElasticInferenceAccelerators` member and returns the updated value.
    #[must_use]
    pub fn with_elastic_inference_accelerators(
        mut self,
        elastic_inference_accelerators: impl IntoIterator<Item = impl Into<LaunchTemplateElasticInferenceAccelerator>>,
    ) -> Self {
        self.elastic_inference_accelerators
            .get_or_insert_with(Vec::new)
            .extend(elastic_inference_accelerators.into_iter().map(Into::into));
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

    /// Returns the `InstanceMarketOptions` member.
    #[must_use]
    pub fn instance_market_options(&self) -> Option<&LaunchTemplateInstanceMarketOptionsRequest> {
        self.instance_market_options.as_ref()
    }

    /// Sets the `InstanceMarketOptions` member, replacing any previous value.
    pub fn set_instance_market_options(
        &mut self,
        instance_market_options: Option<LaunchTemplateInstanceMarketOptionsRequest>,
    ) {
        self.instance_market_options = instance_market_options;
    }

    /// Sets the `InstanceMarketOptions` member and returns the updated value.
    #[must_use]
    pub fn with_instance_market_options(
        mut self,
        instance_market_options: impl Into<LaunchTemplateInstanceMarketOptionsRequest>,
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
    pub fn cpu_options(&self) -> Option<&LaunchTemplateCpuOptionsRequest> {
        self.cpu_options.as_ref()
    }

    /// Sets the `CpuOptions` member, replacing any previous value.
    pub fn set_cpu_options(&mut self, cpu_options: Option<LaunchTemplateCpuOptionsRequest>) {
        self.cpu_options = cpu_options;
    }

    /// Sets the `CpuOptions` member and returns the updated value.
    #[must_use]
    pub fn with_cpu_options(
        mut self,
        cpu_options: impl Into<LaunchTemplateCpuOptionsRequest>,
    ) -> Self {
        self.cpu_options = Some(cpu_options.into());
        self
    }

    /// Returns the `CapacityReservationSpecification` member.
    #[must_use]
    pub fn capacity_reservation_specification(
        &self,
    ) -> Option<&LaunchTemplateCapacityReservationSpecificationRequest> {
        self.capacity_reservation_specification.as_ref()
    }

    /// Sets the `CapacityReservationSpecification` member, replacing any previous value.
    pub fn set_capacity_reservation_specification(
        &mut self,
        capacity_reservation_specification: Option<LaunchTemplateCapacityReservationSpecificationRequest>,
    ) {
        self.capacity_reservation_specification = capacity_reservation_specification;
    }

    /// Sets the `CapacityReservationSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_specification(
        mut self,
        capacity_reservation_specification: impl Into<LaunchTemplateCapacityReservationSpecificationRequest>,
    ) -> Self {
        self.capacity_reservation_specification = Some(capacity_reservation_specification.into());
        self
    }

    /// Returns the `LicenseSpecifications` member.
    #[must_use]
    pub fn license_specifications(&self) -> Option<&[LaunchTemplateLicenseConfigurationRequest]> {
        self.license_specifications.as_deref()
    }

    /// Sets the `LicenseSpecifications` member, replacing any previous value.
    pub fn set_license_specifications(
        &mut self,
        license_specifications: Option<Vec<LaunchTemplateLicenseConfigurationRequest>>,
    ) {
        self.license_specifications = license_specifications;
    }

    /// Appends to the `LicenseSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_license_specifications(
        mut self,
        license_specifications: impl IntoIterator<Item = impl Into<LaunchTemplateLicenseConfigurationRequest>>,
    ) -> Self {
        self.license_specifications
            .get_or_insert_with(Vec::new)
            .extend(license_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `HibernationOptions` member.
    #[must_use]
    pub fn hibernation_options(&self) -> Option<&LaunchTemplateHibernationOptionsRequest> {
        self.hibernation_options.as_ref()
    }

    /// Sets the `HibernationOptions` member, replacing any previous value.
    pub fn set_hibernation_options(
        &mut self,
        hibernation_options: Option<LaunchTemplateHibernationOptionsRequest>,
    ) {
        self.hibernation_options = hibernation_options;
    }

    /// Sets the `HibernationOptions` member and returns the updated value.
    #[must_use]
    pub fn with_hibernation_options(
        mut self,
        hibernation_options: impl Into<LaunchTemplateHibernationOptionsRequest>,
    ) -> Self {
        self.hibernation_options = Some(hibernation_options.into());
        self
    }

    /// Returns the `MetadataOptions` member.
    #[must_use]
    pub fn metadata_options(&self) -> Option<&LaunchTemplateInstanceMetadataOptionsRequest> {
        self.metadata_options.as_ref()
    }

    /// Sets the `MetadataOptions` member, replacing any previous value.
    pub fn set_metadata_options(
        &mut self,
        metadata_options: Option<LaunchTemplateInstanceMetadataOptionsRequest>,
    ) {
        self.metadata_options = metadata_options;
    }

    /// Sets the `MetadataOptions` member and returns the updated value.
    #[must_use]
    pub fn with_metadata_options(
        mut self,
        metadata_options: impl Into<LaunchTemplateInstanceMetadataOptionsRequest>,
    ) -> Self {
        self.metadata_options = Some(metadata_options.into());
        self
    }
}

impl Shape for RequestLaunchTemplateData {
    const SHAPE_NAME: &'static str = "RequestLaunchTemplateData";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("IamInstanceProfile", false, self.iam_instance_profile.as_ref()),
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("KeyName", false, self.key_name.as_ref()),
            Member::new("Monitoring", false, self.monitoring.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
            Member::new("RamDiskId", false, self.ram_disk_id.as_ref()),
            Member::new("DisableApiTermination", false, self.disable_api_termination.as_ref()),
            Member::new(
                "InstanceInitiatedShutdownBehavior",
                false,
                self.instance_initiated_shutdown_behavior.as_ref(),
            ),
            Member::new("UserData", false, self.user_data.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
            Member::new(
                "ElasticGpuSpecifications",
                false,
                self.elastic_gpu_specifications.as_ref(),
            ),
            Member::new(
                "ElasticInferenceAccelerators",
                false,
                self.elastic_inference_accelerators.as_ref(),
            ),
            Member::new("SecurityGroupIds", false, self.security_group_ids.as_ref()),
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("InstanceMarketOptions", false, self.instance_market_options.as_ref()),
            Member::new("CreditSpecification", false, self.credit_specification.as_ref()),
            Member::new("CpuOptions", false, self.cpu_options.as_ref()),
            Member::new(
                "CapacityReservationSpecification",
                false,
                self.capacity_reservation_specification.as_ref(),
            ),
            Member::new("LicenseSpecifications", false, self.license_specifications.as_ref()),
            Member::new("HibernationOptions", false, self.hibernation_options.as_ref()),
            Member::new("MetadataOptions", false, self.metadata_options.as_ref()),
        ]
    }
}

impl fmt::Display for RequestLaunchTemplateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Reservation.
///
/// Describes a launch request for one or more instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "Groups", skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupIdentifier>>,
    /// The instances.
    #[serde(rename = "Instances", skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Instance>>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "RequesterId", skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<String>,
    #[serde(rename = "ReservationId", skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
}

impl Reservation {
    /// Returns the `Groups` member.
    #[must_use]
    pub fn groups(&self) -> Option<&[GroupIdentifier]> {
        self.groups.as_deref()
    }

    /// Sets the `Groups` member, replacing any previous value.
    pub fn set_groups(&mut self, groups: Option<Vec<GroupIdentifier>>) {
        self.groups = groups;
    }

    /// Appends to the `Groups` member and returns the updated value.
    #[must_use]
    pub fn with_groups(
        mut self,
        groups: impl IntoIterator<Item = impl Into<GroupIdentifier>>,
    ) -> Self {
        self.groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `Instances` member.
    #[must_use]
    pub fn instances(&self) -> Option<&[Instance]> {
        self.instances.as_deref()
    }

    /// Sets the `Instances` member, replacing any previous value.
    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances;
    }

    /// Appends to the `Instances` member and returns the updated value.
    #[must_use]
    pub fn with_instances(
        mut self,
        instances: impl IntoIterator<Item = impl Into<Instance>>,
    ) -> Self {
        self.instances
            .get_or_insert_with(Vec::new)
            .extend(instances.into_iter().map(Into::into));
        self
    }

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `RequesterId` member.
    #[must_use]
    pub fn requester_id(&self) -> Option<&str> {
        self.requester_id.as_deref()
    }

    /// Sets the `RequesterId` member, replacing any previous value.
    pub fn set_requester_id(&mut self, requester_id: Option<String>) {
        self.requester_id = requester_id;
    }

    /// Sets the `RequesterId` member and returns the updated value.
    #[must_use]
    pub fn with_requester_id(mut self, requester_id: impl Into<String>) -> Self {
        self.requester_id = Some(requester_id.into());
        self
    }

    /// Returns the `ReservationId` member.
    #[must_use]
    pub fn reservation_id(&self) -> Option<&str> {
        self.reservation_id.as_deref()
    }

    /// Sets the `ReservationId` member, replacing any previous value.
    pub fn set_reservation_id(&mut self, reservation_id: Option<String>) {
        self.reservation_id = reservation_id;
    }

    /// Sets the `ReservationId` member and returns the updated value.
    #[must_use]
    pub fn with_reservation_id(mut self, reservation_id: impl Into<String>) -> Self {
        self.reservation_id = Some(reservation_id.into());
        self
    }
}

impl Shape for Reservation {
    const SHAPE_NAME: &'static str = "Reservation";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Groups", false, self.groups.as_ref()),
            Member::new("Instances", false, self.instances.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("RequesterId", false, self.requester_id.as_ref()),
            Member::new("ReservationId", false, self.reservation_id.as_ref()),
        ]
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ReservedInstances.
///
/// Describes a Reserved Instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservedInstances {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// The duration of the Reserved Instance, in seconds.
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// The time when the Reserved Instance expires.
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// The purchase price of the Reserved Instance.
    #[serde(rename = "FixedPrice", skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f32>,
    #[serde(rename = "InstanceCount", skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "ProductDescription", skip_serializing_if = "Option::is_none")]
    pub product_description: Option<RIProductDescription>,
    #[serde(rename = "ReservedInstancesId", skip_serializing_if = "Option::is_none")]
    pub reserved_instances_id: Option<String>,
    #[serde(rename = "Start", skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// The state of the Reserved Instance purchase.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<ReservedInstanceState>,
    /// The usage price of the Reserved Instance, per hour.
    #[serde(rename = "UsagePrice", skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f32>,
    #[serde(rename = "CurrencyCode", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCodeValues>,
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Tenancy>,
    #[serde(rename = "OfferingClass", skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    #[serde(rename = "OfferingType", skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
    #[serde(rename = "RecurringCharges", skip_serializing_if = "Option::is_none")]
    pub recurring_charges: Option<Vec<RecurringCharge>>,
    #[serde(rename = "Scope", skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ReservedInstances {
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

    /// Returns the `Duration` member.
    #[must_use]
    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    /// Sets the `Duration` member, replacing any previous value.
    pub fn set_duration(&mut self, duration: Option<i64>) {
        self.duration = duration;
    }

    /// Sets the `Duration` member and returns the updated value.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<i64>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Returns the `End` member.
    #[must_use]
    pub fn end(&self) -> Option<&DateTime<Utc>> {
        self.end.as_ref()
    }

    /// Sets the `End` member, replacing any previous value.
    pub fn set_end(&mut self, end: Option<DateTime<Utc>>) {
        self.end = end;
    }

    /// Sets the `End` member and returns the updated value.
    #[must_use]
    pub fn with_end(mut self, end: impl Into<DateTime<Utc>>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Returns the `FixedPrice` member.
    #[must_use]
    pub fn fixed_price(&self) -> Option<f32> {
        self.fixed_price
    }

    /// Sets the `FixedPrice` member, replacing any previous value.
    pub fn set_fixed_price(&mut self, fixed_price: Option<f32>) {
        self.fixed_price = fixed_price;
    }

    /// Sets the `FixedPrice` member and returns the updated value.
    #[must_use]
    pub fn with_fixed_price(mut self, fixed_price: impl Into<f32>) -> Self {
        self.fixed_price = Some(fixed_price.into());
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

    /// Returns the `ReservedInstancesId` member.
    #[must_use]
    pub fn reserved_instances_id(&self) -> Option<&str> {
        self.reserved_instances_id.as_deref()
    }

    /// Sets the `ReservedInstancesId` member, replacing any previous value.
    pub fn set_reserved_instances_id(&mut self, reserved_instances_id: Option<String>) {
        self.reserved_instances_id = reserved_instances_id;
    }

    /// Sets the `ReservedInstancesId` member and returns the updated value.
    #[must_use]
    pub fn with_reserved_instances_id(mut self, reserved_instances_id: impl Into<String>) -> Self {
        self.reserved_instances_id = Some(reserved_instances_id.into());
        self
    }

    /// Returns the `Start` member.
    #[must_use]
    pub fn start(&self) -> Option<&DateTime<Utc>> {
        self.start.as_ref()
    }

    /// Sets the `Start` member, replacing any previous value.
    pub fn set_start(&mut self, start: Option<DateTime<Utc>>) {
        self.start = start;
    }

    /// Sets the `Start` member and returns the updated value.
    #[must_use]
    pub fn with_start(mut self, start: impl Into<DateTime<Utc>>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&ReservedInstanceState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<ReservedInstanceState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<ReservedInstanceState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `UsagePrice` member.
    #[must_use]
    pub fn usage_price(&self) -> Option<f32> {
        self.usage_price
    }

    /// Sets the `UsagePrice` member, replacing any previous value.
    pub fn set_usage_price(&mut self, usage_price: Option<f32>) {
        self.usage_price = usage_price;
    }

    /// Sets the `UsagePrice` member and returns the updated value.
    #[must_use]
    pub fn with_usage_price(mut self, usage_price: impl Into<f32>) -> Self {
        self.usage_price = Some(usage_price.into());
        self
    }

    /// Returns the `CurrencyCode` member.
    #[must_use]
    pub fn currency_code(&self) -> Option<&CurrencyCodeValues> {
        self.currency_code.as_ref()
    }

    /// Sets the `CurrencyCode` member, replacing any previous value.
    pub fn set_currency_code(&mut self, currency_code: Option<CurrencyCodeValues>) {
        self.currency_code = currency_code;
    }

    /// Sets the `CurrencyCode` member and returns the updated value.
    #[must_use]
    pub fn with_currency_code(mut self, currency_code: impl Into<CurrencyCodeValues>) -> Self {
        self.currency_code = Some(currency_code.into());
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

    /// Returns the `RecurringCharges` member.
    #[must_use]
    pub fn recurring_charges(&self) -> Option<&[RecurringCharge]> {
        self.recurring_charges.as_deref()
    }

    /// Sets the `RecurringCharges` member, replacing any previous value.
    pub fn set_recurring_charges(&mut self, recurring_charges: Option<Vec<RecurringCharge>>) {
        self.recurring_charges = recurring_charges;
    }

    /// Appends to the `RecurringCharges` member and returns the updated value.
    #[must_use]
    pub fn with_recurring_charges(
        mut self,
        recurring_charges: impl IntoIterator<Item = impl Into<RecurringCharge>>,
    ) -> Self {
        self.recurring_charges
            .get_or_insert_with(Vec::new)
            .extend(recurring_charges.into_iter().map(Into::into));
        self
    }

    /// Returns the `Scope` member.
    #[must_use]
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// Sets the `Scope` member, replacing any previous value.
    pub fn set_scope(&mut self, scope: Option<Scope>) {
        self.scope = scope;
    }

    /// Sets the `Scope` member and returns the updated value.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<Scope>) -> Self {
        self.scope = Some(scope.into());
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

impl Shape for ReservedInstances {
    const SHAPE_NAME: &'static str = "ReservedInstances";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Duration", false, self.duration.as_ref()),
            Member::new("End", false, self.end.as_ref()),
            Member::new("FixedPrice", false, self.fixed_price.as_ref()),
            Member::new("InstanceCount", false, self.instance_count.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("ProductDescription", false, self.product_description.as_ref()),
            Member::new("ReservedInstancesId", false, self.reserved_instances_id.as_ref()),
            Member::new("Start", false, self.start.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("UsagePrice", false, self.usage_price.as_ref()),
            Member::new("CurrencyCode", false, self.currency_code.as_ref()),
            Member::new("InstanceTenancy", false, self.instance_tenancy.as_ref()),
            Member::new("OfferingClass", false, self.offering_class.as_ref()),
            Member::new("OfferingType", false, self.offering_type.as_ref()),
            Member::new("RecurringCharges", false, self.recurring_charges.as_ref()),
            Member::new("Scope", false, self.scope.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl PartialEq for ReservedInstances {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for ReservedInstances {}

impl Hash for ReservedInstances {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for ReservedInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ReservedInstancesOffering.
///
/// Describes a Reserved Instance offering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservedInstancesOffering {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// The duration of the Reserved Instance, in seconds.
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// The purchase price of the Reserved Instance.
    #[serde(rename = "FixedPrice", skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f32>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "ProductDescription", skip_serializing_if = "Option::is_none")]
    pub product_description: Option<RIProductDescription>,
    #[serde(rename = "ReservedInstancesOfferingId", skip_serializing_if = "Option::is_none")]
    pub reserved_instances_offering_id: Option<String>,
    /// The usage price of the Reserved Instance, per hour.
    #[serde(rename = "UsagePrice", skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f32>,
    #[serde(rename = "CurrencyCode", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCodeValues>,
    #[serde(rename = "InstanceTenancy", skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Tenancy>,
    #[serde(rename = "Marketplace", skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<bool>,
    #[serde(rename = "OfferingClass", skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClassType>,
    #[serde(rename = "OfferingType", skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingTypeValues>,
    #[serde(rename = "PricingDetails", skip_serializing_if = "Option::is_none")]
    pub pricing_details: Option<Vec<PricingDetail>>,
    #[serde(rename = "RecurringCharges", skip_serializing_if = "Option::is_none")]
    pub recurring_charges: Option<Vec<RecurringCharge>>,
    #[serde(rename = "Scope", skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
}

impl ReservedInstancesOffering {
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

    /// Returns the `Duration` member.
    #[must_use]
    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    /// Sets the `Duration` member, replacing any previous value.
    pub fn set_duration(&mut self, duration: Option<i64>) {
        self.duration = duration;
    }

    /// Sets the `Duration` member and returns the updated value.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<i64>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Returns the `FixedPrice` member.
    #[must_use]
    pub fn fixed_price(&self) -> Option<f32> {
        self.fixed_price
    }

    /// Sets the `FixedPrice` member, replacing any previous value.
    pub fn set_fixed_price(&mut self, fixed_price: Option<f32>) {
        self.fixed_price = fixed_price;
    }

    /// Sets the `FixedPrice` member and returns the updated value.
    #[must_use]
    pub fn with_fixed_price(mut self, fixed_price: impl Into<f32>) -> Self {
        self.fixed_price = Some(fixed_price.into());
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

    /// Returns the `ReservedInstancesOfferingId` member.
    #[must_use]
    pub fn reserved_instances_offering_id(&self) -> Option<&str> {
        self.reserved_instances_offering_id.as_deref()
    }

    /// Sets the `ReservedInstancesOfferingId` member, replacing any previous value.
    pub fn set_reserved_instances_offering_id(
        &mut self,
        reserved_instances_offering_id: Option<String>,
    ) {
        self.reserved_instances_offering_id = reserved_instances_offering_id;
    }

    /// Sets the `ReservedInstancesOfferingId` member and returns the updated value.
    #[must_use]
    pub fn with_reserved_instances_offering_id(
        mut self,
        reserved_instances_offering_id: impl Into<String>,
    ) -> Self {
        self.reserved_instances_offering_id = Some(reserved_instances_offering_id.into());
        self
    }

    /// Returns the `UsagePrice` member.
    #[must_use]
    pub fn usage_price(&self) -> Option<f32> {
        self.usage_price
    }

    /// Sets the `UsagePrice` member, replacing any previous value.
    pub fn set_usage_price(&mut self, usage_price: Option<f32>) {
        self.usage_price = usage_price;
    }

    /// Sets the `UsagePrice` member and returns the updated value.
    #[must_use]
    pub fn with_usage_price(mut self, usage_price: impl Into<f32>) -> Self {
        self.usage_price = Some(usage_price.into());
        self
    }

    /// Returns the `CurrencyCode` member.
    #[must_use]
    pub fn currency_code(&self) -> Option<&CurrencyCodeValues> {
        self.currency_code.as_ref()
    }

    /// Sets the `CurrencyCode` member, replacing any previous value.
    pub fn set_currency_code(&mut self, currency_code: Option<CurrencyCodeValues>) {
        self.currency_code = currency_code;
    }

    /// Sets the `CurrencyCode` member and returns the updated value.
    #[must_use]
    pub fn with_currency_code(mut self, currency_code: impl Into<CurrencyCodeValues>) -> Self {
        self.currency_code = Some(currency_code.into());
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

    /// Returns the `Marketplace` member.
    #[must_use]
    pub fn marketplace(&self) -> Option<bool> {
        self.marketplace
    }

    /// Sets the `Marketplace` member, replacing any previous value.
    pub fn set_marketplace(&mut self, marketplace: Option<bool>) {
        self.marketplace = marketplace;
    }

    /// Sets the `Marketplace` member and returns the updated value.
    #[must_use]
    pub fn with_marketplace(mut self, marketplace: impl Into<bool>) -> Self {
        self.marketplace = Some(marketplace.into());
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

    /// Returns the `PricingDetails` member.
    #[must_use]
    pub fn pricing_details(&self) -> Option<&[PricingDetail]> {
        self.pricing_details.as_deref()
    }

    /// Sets the `PricingDetails` member, replacing any previous value.
    pub fn set_pricing_details(&mut self, pricing_details: Option<Vec<PricingDetail>>) {
        self.pricing_details = pricing_details;
    }

    /// Appends to the `PricingDetails` member and returns the updated value.
    #[must_use]
    pub fn with_pricing_details(
        mut self,
        pricing_details: impl IntoIterator<Item = impl Into<PricingDetail>>,
    ) -> Self {
        self.pricing_details
            .get_or_insert_with(Vec::new)
            .extend(pricing_details.into_iter().map(Into::into));
        self
    }

    /// Returns the `RecurringCharges` member.
    #[must_use]
    pub fn recurring_charges(&self) -> Option<&[RecurringCharge]> {
        self.recurring_charges.as_deref()
    }

    /// Sets the `RecurringCharges` member, replacing any previous value.
    pub fn set_recurring_charges(&mut self, recurring_charges: Option<Vec<RecurringCharge>>) {
        self.recurring_charges = recurring_charges;
    }

    /// Appends to the `RecurringCharges` member and returns the updated value.
    #[must_use]
    pub fn with_recurring_charges(
        mut self,
        recurring_charges: impl IntoIterator<Item = impl Into<RecurringCharge>>,
    ) -> Self {
        self.recurring_charges
            .get_or_insert_with(Vec::new)
            .extend(recurring_charges.into_iter().map(Into::into));
        self
    }

    /// Returns the `Scope` member.
    #[must_use]
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// Sets the `Scope` member, replacing any previous value.
    pub fn set_scope(&mut self, scope: Option<Scope>) {
        self.scope = scope;
    }

    /// Sets the `Scope` member and returns the updated value.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<Scope>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

impl Shape for ReservedInstancesOffering {
    const SHAPE_NAME: &'static str = "ReservedInstancesOffering";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("Duration", false, self.duration.as_ref()),
            Member::new("FixedPrice", false, self.fixed_price.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("ProductDescription", false, self.product_description.as_ref()),
            Member::new(
                "ReservedInstancesOfferingId",
                false,
                self.reserved_instances_offering_id.as_ref(),
            ),
            Member::new("UsagePrice", false, self.usage_price.as_ref()),
            Member::new("CurrencyCode", false, self.currency_code.as_ref()),
            Member::new("InstanceTenancy", false, self.instance_tenancy.as_ref()),
            Member::new("Marketplace", false, self.marketplace.as_ref()),
            Member::new("OfferingClass", false, self.offering_class.as_ref()),
            Member::new("OfferingType", false, self.offering_type.as_ref()),
            Member::new("PricingDetails", false, self.pricing_details.as_ref()),
            Member::new("RecurringCharges", false, self.recurring_charges.as_ref()),
            Member::new("Scope", false, self.scope.as_ref()),
        ]
    }
}

impl PartialEq for ReservedInstancesOffering {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for ReservedInstancesOffering {}

impl Hash for ReservedInstancesOffering {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for ReservedInstancesOffering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 ResponseLaunchTemplateData.
///
/// The information for a launch template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseLaunchTemplateData {
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<LaunchTemplateIamInstanceProfileSpecification>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<LaunchTemplateBlockDeviceMapping>>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<LaunchTemplateInstanceNetworkInterfaceSpecification>>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<LaunchTemplatesMonitoring>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<LaunchTemplatePlacement>,
    #[serde(rename = "RamDiskId", skip_serializing_if = "Option::is_none")]
    pub ram_disk_id: Option<String>,
    #[serde(rename = "DisableApiTermination", skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
    #[serde(rename = "InstanceInitiatedShutdownBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_initiated_shutdown_behavior: Option<ShutdownBehavior>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<LaunchTemplateTagSpecification>>,
    #[serde(rename = "ElasticGpuSpecifications", skip_serializing_if = "Option::is_none")]
    pub elastic_gpu_specifications: Option<Vec<ElasticGpuSpecificationResponse>>,
    #[serde(rename = "ElasticInferenceAccelerators", skip_serializing_if = "Option::is_none")]
    pub elastic_inference_accelerators: Option<Vec<LaunchTemplateElasticInferenceAcceleratorResponse>>,
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(rename = "InstanceMarketOptions", skip_serializing_if = "Option::is_none")]
    pub instance_market_options: Option<LaunchTemplateInstanceMarketOptions>,
    #[serde(rename = "CreditSpecification", skip_serializing_if = "Option::is_none")]
    pub credit_specification: Option<CreditSpecification>,
    #[serde(rename = "CpuOptions", skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<LaunchTemplateCpuOptions>,
    #[serde(rename = "CapacityReservationSpecification", skip_serializing_if = "Option::is_none")]
    pub capacity_reservation_specification: Option<LaunchTemplateCapacityReservationSpecificationResponse>,
    #[serde(rename = "LicenseSpecifications", skip_serializing_if = "Option::is_none")]
    pub license_specifications: Option<Vec<LaunchTemplateLicenseConfiguration>>,
    #[serde(rename = "HibernationOptions", skip_serializing_if = "Option::is_none")]
    pub hibernation_options: Option<LaunchTemplateHibernationOptions>,
    #[serde(rename = "MetadataOptions", skip_serializing_if = "Option::is_none")]
    pub metadata_options: Option<LaunchTemplateInstanceMetadataOptions>,
}

impl ResponseLaunchTemplateData {
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
    pub fn iam_instance_profile(&self) -> Option<&LaunchTemplateIamInstanceProfileSpecification> {
        self.iam_instance_profile.as_ref()
    }

    /// Sets the `IamInstanceProfile` member, replacing any previous value.
    pub fn set_iam_instance_profile(
        &mut self,
        iam_instance_profile: Option<LaunchTemplateIamInstanceProfileSpecification>,
    ) {
        self.iam_instance_profile = iam_instance_profile;
    }

    /// Sets the `IamInstanceProfile` member and returns the updated value.
    #[must_use]
    pub fn with_iam_instance_profile(
        mut self,
        iam_instance_profile: impl Into<LaunchTemplateIamInstanceProfileSpecification>,
    ) -> Self {
        self.iam_instance_profile = Some(iam_instance_profile.into());
        self
    }

    /// Returns the `BlockDeviceMappings` member.
    #[must_use]
    pub fn block_device_mappings(&self) -> Option<&[LaunchTemplateBlockDeviceMapping]> {
        self.block_device_mappings.as_deref()
    }

    /// Sets the `BlockDeviceMappings` member, replacing any previous value.
    pub fn set_block_device_mappings(
        &mut self,
        block_device_mappings: Option<Vec<LaunchTemplateBlockDeviceMapping>>,
    ) {
        self.block_device_mappings = block_device_mappings;
    }

    /// Appends to the `BlockDeviceMappings` member and returns the updated value.
    #[must_use]
    pub fn with_block_device_mappings(
        mut self,
        block_device_mappings: impl IntoIterator<Item = impl Into<LaunchTemplateBlockDeviceMapping>>,
    ) -> Self {
        self.block_device_mappings
            .get_or_insert_with(Vec::new)
            .extend(block_device_mappings.into_iter().map(Into::into));
        self
    }

    /// Returns the `NetworkInterfaces` member.
    #[must_use]
    pub fn network_interfaces(
        &self,
    ) -> Option<&[LaunchTemplateInstanceNetworkInterfaceSpecification]> {
        self.network_interfaces.as_deref()
    }

    /// Sets the `NetworkInterfaces` member, replacing any previous value.
    pub fn set_network_interfaces(
        &mut self,
        network_interfaces: Option<Vec<LaunchTemplateInstanceNetworkInterfaceSpecification>>,
    ) {
        self.network_interfaces = network_interfaces;
    }

    /// Appends to the `NetworkInterfaces` member and returns the updated value.
    #[must_use]
    pub fn with_network_interfaces(
        mut self,
        network_interfaces: impl IntoIterator<Item = impl Into<LaunchTemplateInstanceNetworkInterfaceSpecification>>,
    ) -> Self {
        self.network_interfaces
            .get_or_insert_with(Vec::new)
            .extend(network_interfaces.into_iter().map(Into::into));
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

    /// Returns the `Monitoring` member.
    #[must_use]
    pub fn monitoring(&self) -> Option<&LaunchTemplatesMonitoring> {
        self.monitoring.as_ref()
    }

    /// Sets the `Monitoring` member, replacing any previous value.
    pub fn set_monitoring(&mut self, monitoring: Option<LaunchTemplatesMonitoring>) {
        self.monitoring = monitoring;
    }

    /// Sets the `Monitoring` member and returns the updated value.
    #[must_use]
    pub fn with_monitoring(mut self, monitoring: impl Into<LaunchTemplatesMonitoring>) -> Self {
        self.monitoring = Some(monitoring.into());
        self
    }

    /// Returns the `Placement` member.
    #[must_use]
    pub fn placement(&self) -> Option<&LaunchTemplatePlacement> {
        self.placement.as_ref()
    }

    /// Sets the `Placement` member, replacing any previous value.
    pub fn set_placement(&mut self, placement: Option<LaunchTemplatePlacement>) {
        self.placement = placement;
    }

    /// Sets the `Placement` member and returns the updated value.
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<LaunchTemplatePlacement>) -> Self {
        self.placement = Some(placement.into());
        self
    }

    /// Returns the `RamDiskId` member.
    #[must_use]
    pub fn ram_disk_id(&self) -> Option<&str> {
        self.ram_disk_id.as_deref()
    }

    /// Sets the `RamDiskId` member, replacing any previous value.
    pub fn set_ram_disk_id(&mut self, ram_disk_id: Option<String>) {
        self.ram_disk_id = ram_disk_id;
    }

    /// Sets the `RamDiskId` member and returns the updated value.
    #[must_use]
    pub fn with_ram_disk_id(mut self, ram_disk_id: impl Into<String>) -> Self {
        self.ram_disk_id = Some(ram_disk_id.into());
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

    /// Returns the `TagSpecifications` member.
    #[must_use]
    pub fn tag_specifications(&self) -> Option<&[LaunchTemplateTagSpecification]> {
        self.tag_specifications.as_deref()
    }

    /// Sets the `TagSpecifications` member, replacing any previous value.
    pub fn set_tag_specifications(
        &mut self,
        tag_specifications: Option<Vec<LaunchTemplateTagSpecification>>,
    ) {
        self.tag_specifications = tag_specifications;
    }

    /// Appends to the `TagSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_tag_specifications(
        mut self,
        tag_specifications: impl IntoIterator<Item = impl Into<LaunchTemplateTagSpecification>>,
    ) -> Self {
        self.tag_specifications
            .get_or_insert_with(Vec::new)
            .extend(tag_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `ElasticGpuSpecifications` member.
    #[must_use]
    pub fn elastic_gpu_specifications(&self) -> Option<&[ElasticGpuSpecificationResponse]> {
        self.elastic_gpu_specifications.as_deref()
    }

    /// Sets the `ElasticGpuSpecifications` member, replacing any previous value.
    pub fn set_elastic_gpu_specifications(
        &mut self,
        elastic_gpu_specifications: Option<Vec<ElasticGpuSpecificationResponse>>,
    ) {
        self.elastic_gpu_specifications = elastic_gpu_specifications;
    }

    /// Appends to the `ElasticGpuSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_elastic_gpu_specifications(
        mut self,
        elastic_gpu_specifications: impl IntoIterator<Item = impl Into<ElasticGpuSpecificationResponse>>,
    ) -> Self {
        self.elastic_gpu_specifications
            .get_or_insert_with(Vec::new)
            .extend(elastic_gpu_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `ElasticInferenceAccelerators` member.
    #[must_use]
    pub fn elastic_inference_accelerators(
        &self,
    ) -> Option<&[LaunchTemplateElasticInferenceAcceleratorResponse]> {
        self.elastic_inference_accelerators.as_deref()
    }

    /// Sets the `ElasticInferenceAccelerators` member, replacing any previous value.
    pub fn set_elastic_inference_accelerators(
        &mut self,
        elastic_inference_accelerators: Option<Vec<LaunchTemplateElasticInferenceAcceleratorResponse>>,
    ) {
        self.elastic_inference_accelerators = elastic_inference_accelerators;
    }

    /// Appends to the `ElasticInferenceAccelerators` member and returns the updated value.
    #[must_use]
    pub fn with_elastic_inference_accelerators(
        mut self,
        elastic_inference_accelerators: impl IntoIterator<Item = impl Into<LaunchTemplateElasticInferenceAcceleratorResponse>>,
    ) -> Self {
        self.elastic_inference_accelerators
            .get_or_insert_with(Vec::new)
            .extend(elastic_inference_accelerators.into_iter().map(Into::into));
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

    /// Returns the `InstanceMarketOptions` member.
    #[must_use]
    pub fn instance_market_options(&self) -> Option<&LaunchTemplateInstanceMarketOptions> {
        self.instance_market_options.as_ref()
    }

    /// Sets the `InstanceMarketOptions` member, replacing any previous value.
    pub fn set_instance_market_options(
        &mut self,
        instance_market_options: Option<LaunchTemplateInstanceMarketOptions>,
    ) {
        self.instance_market_options = instance_market_options;
    }

    /// Sets the `InstanceMarketOptions` member and returns the updated value.
    #[must_use]
    pub fn with_instance_market_options(
        mut self,
        instance_market_options: impl Into<LaunchTemplateInstanceMarketOptions>,
    ) -> Self {
        self.instance_market_options = Some(instance_market_options.into());
        self
    }

    /// Returns the `CreditSpecification` member.
    #[must_use]
    pub fn credit_specification(&self) -> Option<&CreditSpecification> {
        self.credit_specification.as_ref()
    }

    /// Sets the `CreditSpecification` member, replacing any previous value.
    pub fn set_credit_specification(&mut self, credit_specification: Option<CreditSpecification>) {
        self.credit_specification = credit_specification;
    }

    /// Sets the `CreditSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_credit_specification(
        mut self,
        credit_specification: impl Into<CreditSpecification>,
    ) -> Self {
        self.credit_specification = Some(credit_specification.into());
        self
    }

    /// Returns the `CpuOptions` member.
    #[must_use]
    pub fn cpu_options(&self) -> Option<&LaunchTemplateCpuOptions> {
        self.cpu_options.as_ref()
    }

    /// Sets the `CpuOptions` member, replacing any previous value.
    pub fn set_cpu_options(&mut self, cpu_options: Option<LaunchTemplateCpuOptions>) {
        self.cpu_options = cpu_options;
    }

    /// Sets the `CpuOptions` member and returns the updated value.
    #[must_use]
    pub fn with_cpu_options(mut self, cpu_options: impl Into<LaunchTemplateCpuOptions>) -> Self {
        self.cpu_options = Some(cpu_options.into());
        self
    }

    /// Returns the `CapacityReservationSpecification` member.
    #[must_use]
    pub fn capacity_reservation_specification(
        &self,
    ) -> Option<&LaunchTemplateCapacityReservationSpecificationResponse> {
        self.capacity_reservation_specification.as_ref()
    }

    /// Sets the `CapacityReservationSpecification` member, replacing any previous value.
    pub fn set_capacity_reservation_specification(
        &mut self,
        capacity_reservation_specification: Option<LaunchTemplateCapacityReservationSpecificationResponse>,
    ) {
        self.capacity_reservation_specification = capacity_reservation_specification;
    }

    /// Sets the `CapacityReservationSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_capacity_reservation_specification(
        mut self,
        capacity_reservation_specification: impl Into<LaunchTemplateCapacityReservationSpecificationResponse>,
    ) -> Self {
        self.capacity_reservation_specification = Some(capacity_reservation_specification.into());
        self
    }

    /// Returns the `LicenseSpecifications` member.
    #[must_use]
    pub fn license_specifications(&self) -> Option<&[LaunchTemplateLicenseConfiguration]> {
        self.license_specifications.as_deref()
    }

    /// Sets the `LicenseSpecifications` member, replacing any previous value.
    pub fn set_license_specifications(
        &mut self,
        license_specifications: Option<Vec<LaunchTemplateLicenseConfiguration>>,
    ) {
        self.license_specifications = license_specifications;
    }

    /// Appends to the `LicenseSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_license_specifications(
        mut self,
        license_specifications: impl IntoIterator<Item = impl Into<LaunchTemplateLicenseConfiguration>>,
    ) -> Self {
        self.license_specifications
            .get_or_insert_with(Vec::new)
            .extend(license_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `HibernationOptions` member.
    #[must_use]
    pub fn hibernation_options(&self) -> Option<&LaunchTemplateHibernationOptions> {
        self.hibernation_options.as_ref()
    }

    /// Sets the `HibernationOptions` member, replacing any previous value.
    pub fn set_hibernation_options(
        &mut self,
        hibernation_options: Option<LaunchTemplateHibernationOptions>,
    ) {
        self.hibernation_options = hibernation_options;
    }

    /// Sets the `HibernationOptions` member and returns the updated value.
    #[must_use]
    pub fn with_hibernation_options(
        mut self,
        hibernation_options: impl Into<LaunchTemplateHibernationOptions>,
    ) -> Self {
        self.hibernation_options = Some(hibernation_options.into());
        self
    }

    /// Returns the `MetadataOptions` member.
    #[must_use]
    pub fn metadata_options(&self) -> Option<&LaunchTemplateInstanceMetadataOptions> {
        self.metadata_options.as_ref()
    }

    /// Sets the `MetadataOptions` member, replacing any previous value.
    pub fn set_metadata_options(
        &mut self,
        metadata_options: Option<LaunchTemplateInstanceMetadataOptions>,
    ) {
        self.metadata_options = metadata_options;
    }

    /// Sets the `MetadataOptions` member and returns the updated value.
    #[must_use]
    pub fn with_metadata_options(
        mut self,
        metadata_options: impl Into<LaunchTemplateInstanceMetadataOptions>,
    ) -> Self {
        self.metadata_options = Some(metadata_options.into());
        self
    }
}

impl Shape for ResponseLaunchTemplateData {
    const SHAPE_NAME: &'static str = "ResponseLaunchTemplateData";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("IamInstanceProfile", false, self.iam_instance_profile.as_ref()),
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("KeyName", false, self.key_name.as_ref()),
            Member::new("Monitoring", false, self.monitoring.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
            Member::new("RamDiskId", false, self.ram_disk_id.as_ref()),
            Member::new("DisableApiTermination", false, self.disable_api_termination.as_ref()),
            Member::new(
                "InstanceInitiatedShutdownBehavior",
                false,
                self.instance_initiated_shutdown_behavior.as_ref(),
            ),
            Member::new("UserData", false, self.user_data.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
            Member::new(
                "ElasticGpuSpecifications",
                false,
                self.elastic_gpu_specifications.as_ref(),
            ),
            Member::new(
                "ElasticInferenceAccelerators",
                false,
                self.elastic_inference_accelerators.as_ref(),
            ),
            Member::new("SecurityGroupIds", false, self.security_group_ids.as_ref()),
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("InstanceMarketOptions", false, self.instance_market_options.as_ref()),
            Member::new("CreditSpecification", false, self.credit_specification.as_ref()),
            Member::new("CpuOptions", false, self.cpu_options.as_ref()),
            Member::new(
                "CapacityReservationSpecification",
                false,
                self.capacity_reservation_specification.as_ref(),
            ),
            Member::new("LicenseSpecifications", false, self.license_specifications.as_ref()),
            Member::new("HibernationOptions", false, self.hibernation_options.as_ref()),
            Member::new("MetadataOptions", false, self.metadata_options.as_ref()),
        ]
    }
}

impl fmt::Display for ResponseLaunchTemplateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Route.
///
/// Describes a route in a route table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "DestinationCidrBlock", skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    #[serde(rename = "DestinationIpv6CidrBlock", skip_serializing_if = "Option::is_none")]
    pub destination_ipv6_cidr_block: Option<String>,
    #[serde(rename = "DestinationPrefixListId", skip_serializing_if = "Option::is_none")]
    pub destination_prefix_list_id: Option<String>,
    #[serde(rename = "EgressOnlyInternetGatewayId", skip_serializing_if = "Option::is_none")]
    pub egress_only_internet_gateway_id: Option<String>,
    #[serde(rename = "GatewayId", skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "InstanceOwnerId", skip_serializing_if = "Option::is_none")]
    pub instance_owner_id: Option<String>,
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
    /// Describes how the route was created.
    #[serde(rename = "Origin", skip_serializing_if = "Option::is_none")]
    pub origin: Option<RouteOrigin>,
    /// The state of the route.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<RouteState>,
    #[serde(rename = "VpcPeeringConnectionId", skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

impl Route {
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

    /// Returns the `InstanceOwnerId` member.
    #[must_use]
    pub fn instance_owner_id(&self) -> Option<&str> {
        self.instance_owner_id.as_deref()
    }

    /// Sets the `InstanceOwnerId` member, replacing any previous value.
    pub fn set_instance_owner_id(&mut self, instance_owner_id: Option<String>) {
        self.instance_owner_id = instance_owner_id;
    }

    /// Sets the `InstanceOwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_instance_owner_id(mut self, instance_owner_id: impl Into<String>) -> Self {
        self.instance_owner_id = Some(instance_owner_id.into());
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

    /// Returns the `Origin` member.
    #[must_use]
    pub fn origin(&self) -> Option<&RouteOrigin> {
        self.origin.as_ref()
    }

    /// Sets the `Origin` member, replacing any previous value.
    pub fn set_origin(&mut self, origin: Option<RouteOrigin>) {
        self.origin = origin;
    }

    /// Sets the `Origin` member and returns the updated value.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<RouteOrigin>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&RouteState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<RouteState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<RouteState>) -> Self {
        self.state = Some(state.into());
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

impl Shape for Route {
    const SHAPE_NAME: &'static str = "Route";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DestinationCidrBlock", false, self.destination_cidr_block.as_ref()),
            Member::new(
                "DestinationIpv6CidrBlock",
                false,
                self.destination_ipv6_cidr_block.as_ref(),
            ),
            Member::new("DestinationPrefixListId", false, self.destination_prefix_list_id.as_ref()),
            Member::new(
                "EgressOnlyInternetGatewayId",
                false,
                self.egress_only_internet_gateway_id.as_ref(),
            ),
            Member::new("GatewayId", false, self.gateway_id.as_ref()),
            Member::new("InstanceId", false, self.instance_id.as_ref()),
            Member::new("InstanceOwnerId", false, self.instance_owner_id.as_ref()),
            Member::new("NatGatewayId", false, self.nat_gateway_id.as_ref()),
            Member::new("TransitGatewayId", false, self.transit_gateway_id.as_ref()),
            Member::new("LocalGatewayId", false, self.local_gateway_id.as_ref()),
            Member::new("CarrierGatewayId", false, self.carrier_gateway_id.as_ref()),
            Member::new("NetworkInterfaceId", false, self.network_interface_id.as_ref()),
            Member::new("Origin", false, self.origin.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("VpcPeeringConnectionId", false, self.vpc_peering_connection_id.as_ref()),
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RouteTable.
///
/// Describes a route table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteTable {
    /// The associations between the route table and subnets or gateways.
    #[serde(rename = "Associations", skip_serializing_if = "Option::is_none")]
    pub associations: Option<Vec<RouteTableAssociation>>,
    #[serde(rename = "PropagatingVgws", skip_serializing_if = "Option::is_none")]
    pub propagating_vgws: Option<Vec<PropagatingVgw>>,
    #[serde(rename = "RouteTableId", skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// The routes in the route table.
    #[serde(rename = "Routes", skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

impl RouteTable {
    /// Returns the `Associations` member.
    #[must_use]
    pub fn associations(&self) -> Option<&[RouteTableAssociation]> {
        self.associations.as_deref()
    }

    /// Sets the `Associations` member, replacing any previous value.
    pub fn set_associations(&mut self, associations: Option<Vec<RouteTableAssociation>>) {
        self.associations = associations;
    }

    /// Appends to the `Associations` member and returns the updated value.
    #[must_use]
    pub fn with_associations(
        mut self,
        associations: impl IntoIterator<Item = impl Into<RouteTableAssociation>>,
    ) -> Self {
        self.associations
            .get_or_insert_with(Vec::new)
            .extend(associations.into_iter().map(Into::into));
        self
    }

    /// Returns the `PropagatingVgws` member.
    #[must_use]
    pub fn propagating_vgws(&self) -> Option<&[PropagatingVgw]> {
        self.propagating_vgws.as_deref()
    }

    /// Sets the `PropagatingVgws` member, replacing any previous value.
    pub fn set_propagating_vgws(&mut self, propagating_vgws: Option<Vec<PropagatingVgw>>) {
        self.propagating_vgws = propagating_vgws;
    }

    /// Appends to the `PropagatingVgws` member and returns the updated value.
    #[must_use]
    pub fn with_propagating_vgws(
        mut self,
        propagating_vgws: impl IntoIterator<Item = impl Into<PropagatingVgw>>,
    ) -> Self {
        self.propagating_vgws
            .get_or_insert_with(Vec::new)
            .extend(propagating_vgws.into_iter().map(Into::into));
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

    /// Returns the `Routes` member.
    #[must_use]
    pub fn routes(&self) -> Option<&[Route]> {
        self.routes.as_deref()
    }

    /// Sets the `Routes` member, replacing any previous value.
    pub fn set_routes(&mut self, routes: Option<Vec<Route>>) {
        self.routes = routes;
    }

    /// Appends to the `Routes` member and returns the updated value.
    #[must_use]
    pub fn with_routes(mut self, routes: impl IntoIterator<Item = impl Into<Route>>) -> Self {
        self.routes
            .get_or_insert_with(Vec::new)
            .extend(routes.into_iter().map(Into::into));
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

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }
}

impl Shape for RouteTable {
    const SHAPE_NAME: &'static str = "RouteTable";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Associations", false, self.associations.as_ref()),
            Member::new("PropagatingVgws", false, self.propagating_vgws.as_ref()),
            Member::new("RouteTableId", false, self.route_table_id.as_ref()),
            Member::new("Routes", false, self.routes.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
        ]
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RouteTableAssociation.
///
/// Describes an association between a route table and a subnet or gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteTableAssociation {
    /// Indicates whether this is the main route table.
    #[serde(rename = "Main", skip_serializing_if = "Option::is_none")]
    pub main: Option<bool>,
    #[serde(rename = "RouteTableAssociationId", skip_serializing_if = "Option::is_none")]
    pub route_table_association_id: Option<String>,
    #[serde(rename = "RouteTableId", skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "GatewayId", skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(rename = "AssociationState", skip_serializing_if = "Option::is_none")]
    pub association_state: Option<RouteTableAssociationState>,
}

impl RouteTableAssociation {
    /// Returns the `Main` member.
    #[must_use]
    pub fn main(&self) -> Option<bool> {
        self.main
    }

    /// Sets the `Main` member, replacing any previous value.
    pub fn set_main(&mut self, main: Option<bool>) {
        self.main = main;
    }

    /// Sets the `Main` member and returns the updated value.
    #[must_use]
    pub fn with_main(mut self, main: impl Into<bool>) -> Self {
        self.main = Some(main.into());
        self
    }

    /// Returns the `RouteTableAssociationId` member.
    #[must_use]
    pub fn route_table_association_id(&self) -> Option<&str> {
        self.route_table_association_id.as_deref()
    }

    /// Sets the `RouteTableAssociationId` member, replacing any previous value.
    pub fn set_route_table_association_id(&mut self, route_table_association_id: Option<String>) {
        self.route_table_association_id = route_table_association_id;
    }

    /// Sets the `RouteTableAssociationId` member and returns the updated value.
    #[must_use]
    pub fn with_route_table_association_id(
        mut self,
        route_table_association_id: impl Into<String>,
    ) -> Self {
        self.route_table_association_id = Some(route_table_association_id.into());
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

    /// Returns the `AssociationState` member.
    #[must_use]
    pub fn association_state(&self) -> Option<&RouteTableAssociationState> {
        self.association_state.as_ref()
    }

    /// Sets the `AssociationState` member, replacing any previous value.
    pub fn set_association_state(&mut self, association_state: Option<RouteTableAssociationState>) {
        self.association_state = association_state;
    }

    /// Sets the `AssociationState` member and returns the updated value.
    #[must_use]
    pub fn with_association_state(
        mut self,
        association_state: impl Into<RouteTableAssociationState>,
    ) -> Self {
        self.association_state = Some(association_state.into());
        self
    }
}

impl Shape for RouteTableAssociation {
    const SHAPE_NAME: &'static str = "RouteTableAssociation";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Main", false, self.main.as_ref()),
            Member::new("RouteTableAssociationId", false, self.route_table_association_id.as_ref()),
            Member::new("RouteTableId", false, self.route_table_id.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("GatewayId", false, self.gateway_id.as_ref()),
            Member::new("AssociationState", false, self.association_state.as_ref()),
        ]
    }
}

impl fmt::Display for RouteTableAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RouteTableAssociationState.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteTableAssociationState {
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<RouteTableAssociationStateCode>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl RouteTableAssociationState {
    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&RouteTableAssociationStateCode> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<RouteTableAssociationStateCode>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<RouteTableAssociationStateCode>) -> Self {
        self.state = Some(state.into());
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
}

impl Shape for RouteTableAssociationState {
    const SHAPE_NAME: &'static str = "RouteTableAssociationState";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("State", false, self.state.as_ref()),
            Member::new("StatusMessage", false, self.status_message.as_ref()),
        ]
    }
}

impl fmt::Display for RouteTableAssociationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 RunInstancesMonitoringEnabled.
///
/// Describes the monitoring of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunInstancesMonitoringEnabled {
    /// Indicates whether detailed monitoring is enabled.
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RunInstancesMonitoringEnabled {
    /// Returns the `Enabled` member.
    #[must_use]
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Sets the `Enabled` member, replacing any previous value.
    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    /// Sets the `Enabled` member and returns the updated value.
    #[must_use]
    pub fn with_enabled(mut self, enabled: impl Into<bool>) -> Self {
        self.enabled = Some(enabled.into());
        self
    }
}

impl Shape for RunInstancesMonitoringEnabled {
    const SHAPE_NAME: &'static str = "RunInstancesMonitoringEnabled";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Enabled", true, self.enabled.as_ref()),
        ]
    }
}

impl fmt::Display for RunInstancesMonitoringEnabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SecurityGroup.
///
/// Describes a security group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecurityGroup {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// The inbound rules associated with the security group.
    #[serde(rename = "IpPermissions", skip_serializing_if = "Option::is_none")]
    pub ip_permissions: Option<Vec<IpPermission>>,
    #[serde(rename = "OwnerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// The outbound rules associated with the security group.
    #[serde(rename = "IpPermissionsEgress", skip_serializing_if = "Option::is_none")]
    pub ip_permissions_egress: Option<Vec<IpPermission>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

impl SecurityGroup {
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

    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `IpPermissions` member.
    #[must_use]
    pub fn ip_permissions(&self) -> Option<&[IpPermission]> {
        self.ip_permissions.as_deref()
    }

    /// Sets the `IpPermissions` member, replacing any previous value.
    pub fn set_ip_permissions(&mut self, ip_permissions: Option<Vec<IpPermission>>) {
        self.ip_permissions = ip_permissions;
    }

    /// Appends to the `IpPermissions` member and returns the updated value.
    #[must_use]
    pub fn with_ip_permissions(
        mut self,
        ip_permissions: impl IntoIterator<Item = impl Into<IpPermission>>,
    ) -> Self {
        self.ip_permissions
            .get_or_insert_with(Vec::new)
            .extend(ip_permissions.into_iter().map(Into::into));
        self
    }

    /// Returns the `OwnerId` member.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Sets the `OwnerId` member, replacing any previous value.
    pub fn set_owner_id(&mut self, owner_id: Option<String>) {
        self.owner_id = owner_id;
    }

    /// Sets the `OwnerId` member and returns the updated value.
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Returns the `GroupId` member.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Sets the `GroupId` member, replacing any previous value.
    pub fn set_group_id(&mut self, group_id: Option<String>) {
        self.group_id = group_id;
    }

    /// Sets the `GroupId` member and returns the updated value.
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Returns the `IpPermissionsEgress` member.
    #[must_use]
    pub fn ip_permissions_egress(&self) -> Option<&[IpPermission]> {
        self.ip_permissions_egress.as_deref()
    }

    /// Sets the `IpPermissionsEgress` member, replacing any previous value.
    pub fn set_ip_permissions_egress(&mut self, ip_permissions_egress: Option<Vec<IpPermission>>) {
        self.ip_permissions_egress = ip_permissions_egress;
    }

    /// Appends to the `IpPermissionsEgress` member and returns the updated value.
    #[must_use]
    pub fn with_ip_permissions_egress(
        mut self,
        ip_permissions_egress: impl IntoIterator<Item = impl Into<IpPermission>>,
    ) -> Self {
        self.ip_permissions_egress
            .get_or_insert_with(Vec::new)
            .extend(ip_permissions_egress.into_iter().map(Into::into));
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

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }
}

impl Shape for SecurityGroup {
    const SHAPE_NAME: &'static str = "SecurityGroup";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Description", false, self.description.as_ref()),
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("IpPermissions", false, self.ip_permissions.as_ref()),
            Member::new("OwnerId", false, self.owner_id.as_ref()),
            Member::new("GroupId", false, self.group_id.as_ref()),
            Member::new("IpPermissionsEgress", false, self.ip_permissions_egress.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
        ]
    }
}

impl fmt::Display for SecurityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SnapshotDetail.
///
/// Describes the snapshot created from the imported disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDetail {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "DeviceName", skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    /// The size of the disk in the snapshot, in GiB.
    #[serde(rename = "DiskImageSize", skip_serializing_if = "Option::is_none")]
    pub disk_image_size: Option<f64>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "Progress", skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(rename = "Url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "UserBucket", skip_serializing_if = "Option::is_none")]
    pub user_bucket: Option<UserBucketDetails>,
}

impl SnapshotDetail {
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

    /// Returns the `DeviceName` member.
    #[must_use]
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    /// Sets the `DeviceName` member, replacing any previous value.
    pub fn set_device_name(&mut self, device_name: Option<String>) {
        self.device_name = device_name;
    }

    /// Sets the `DeviceName` member and returns the updated value.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = Some(device_name.into());
        self
    }

    /// Returns the `DiskImageSize` member.
    #[must_use]
    pub fn disk_image_size(&self) -> Option<f64> {
        self.disk_image_size
    }

    /// Sets the `DiskImageSize` member, replacing any previous value.
    pub fn set_disk_image_size(&mut self, disk_image_size: Option<f64>) {
        self.disk_image_size = disk_image_size;
    }

    /// Sets the `DiskImageSize` member and returns the updated value.
    #[must_use]
    pub fn with_disk_image_size(mut self, disk_image_size: impl Into<f64>) -> Self {
        self.disk_image_size = Some(disk_image_size.into());
        self
    }

    /// Returns the `Format` member.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Sets the `Format` member, replacing any previous value.
    pub fn set_format(&mut self, format: Option<String>) {
        self.format = format;
    }

    /// Sets the `Format` member and returns the updated value.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
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

    /// Returns the `Url` member.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Sets the `Url` member, replacing any previous value.
    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    /// Sets the `Url` member and returns the updated value.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the `UserBucket` member.
    #[must_use]
    pub fn user_bucket(&self) -> Option<&UserBucketDetails> {
        self.user_bucket.as_ref()
    }

    /// Sets the `UserBucket` member, replacing any previous value.
    pub fn set_user_bucket(&mut self, user_bucket: Option<UserBucketDetails>) {
        self.user_bucket = user_bucket;
    }

    /// Sets the `UserBucket` member and returns the updated value.
    #[must_use]
    pub fn with_user_bucket(mut self, user_bucket: impl Into<UserBucketDetails>) -> Self {
        self.user_bucket = Some(user_bucket.into());
        self
    }
}

impl Shape for SnapshotDetail {
    const SHAPE_NAME: &'static str = "SnapshotDetail";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Description", false, self.description.as_ref()),
            Member::new("DeviceName", false, self.device_name.as_ref()),
            Member::new("DiskImageSize", false, self.disk_image_size.as_ref()),
            Member::new("Format", false, self.format.as_ref()),
            Member::new("Progress", false, self.progress.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("StatusMessage", false, self.status_message.as_ref()),
            Member::new("Url", false, self.url.as_ref()),
            Member::new("UserBucket", false, self.user_bucket.as_ref()),
        ]
    }
}

impl PartialEq for SnapshotDetail {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for SnapshotDetail {}

impl Hash for SnapshotDetail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for SnapshotDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotFleetLaunchSpecification.
///
/// Describes the launch specification for one or more Spot Instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotFleetLaunchSpecification {
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<GroupIdentifier>>,
    #[serde(rename = "AddressingType", skip_serializing_if = "Option::is_none")]
    pub addressing_type: Option<String>,
    #[serde(rename = "BlockDeviceMappings", skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(rename = "EbsOptimized", skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(rename = "IamInstanceProfile", skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<IamInstanceProfileSpecification>,
    #[serde(rename = "ImageId", skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    #[serde(rename = "KernelId", skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(rename = "KeyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(rename = "Monitoring", skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<SpotFleetMonitoring>,
    #[serde(rename = "NetworkInterfaces", skip_serializing_if = "Option::is_none")]
    pub network_interfaces: Option<Vec<InstanceNetworkInterfaceSpecification>>,
    #[serde(rename = "Placement", skip_serializing_if = "Option::is_none")]
    pub placement: Option<SpotPlacement>,
    #[serde(rename = "RamdiskId", skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    #[serde(rename = "SubnetId", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(rename = "UserData", skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// The number of units provided by the specified instance type.
    #[serde(rename = "WeightedCapacity", skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<f64>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<SpotFleetTagSpecification>>,
}

impl SpotFleetLaunchSpecification {
    /// Returns the `SecurityGroups` member.
    #[must_use]
    pub fn security_groups(&self) -> Option<&[GroupIdentifier]> {
        self.security_groups.as_deref()
    }

    /// Sets the `SecurityGroups` member, replacing any previous value.
    pub fn set_security_groups(&mut self, security_groups: Option<Vec<GroupIdentifier>>) {
        self.security_groups = security_groups;
    }

    /// Appends to the `SecurityGroups` member and returns the updated value.
    #[must_use]
    pub fn with_security_groups(
        mut self,
        security_groups: impl IntoIterator<Item = impl Into<GroupIdentifier>>,
    ) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .extend(security_groups.into_iter().map(Into::into));
        self
    }

    /// Returns the `AddressingType` member.
    #[must_use]
    pub fn addressing_type(&self) -> Option<&str> {
        self.addressing_type.as_deref()
    }

    /// Sets the `AddressingType` member, replacing any previous value.
    pub fn set_addressing_type(&mut self, addressing_type: Option<String>) {
        self.addressing_type = addressing_type;
    }

    /// Sets the `AddressingType` member and returns the updated value.
    #[must_use]
    pub fn with_addressing_type(mut self, addressing_type: impl Into<String>) -> Self {
        self.addressing_type = Some(addressing_type.into());
        self
    }

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

    /// Returns the `Monitoring` member.
    #[must_use]
    pub fn monitoring(&self) -> Option<&SpotFleetMonitoring> {
        self.monitoring.as_ref()
    }

    /// Sets the `Monitoring` member, replacing any previous value.
    pub fn set_monitoring(&mut self, monitoring: Option<SpotFleetMonitoring>) {
        self.monitoring = monitoring;
    }

    /// Sets the `Monitoring` member and returns the updated value.
    #[must_use]
    pub fn with_monitoring(mut self, monitoring: impl Into<SpotFleetMonitoring>) -> Self {
        self.monitoring = Some(monitoring.into());
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

    /// Returns the `Placement` member.
    #[must_use]
    pub fn placement(&self) -> Option<&SpotPlacement> {
        self.placement.as_ref()
    }

    /// Sets the `Placement` member, replacing any previous value.
    pub fn set_placement(&mut self, placement: Option<SpotPlacement>) {
        self.placement = placement;
    }

    /// Sets the `Placement` member and returns the updated value.
    #[must_use]
    pub fn with_placement(mut self, placement: impl Into<SpotPlacement>) -> Self {
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

    /// Returns the `SpotPrice` member.
    #[must_use]
    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    /// Sets the `SpotPrice` member, replacing any previous value.
    pub fn set_spot_price(&mut self, spot_price: Option<String>) {
        self.spot_price = spot_price;
    }

    /// Sets the `SpotPrice` member and returns the updated value.
    #[must_use]
    pub fn with_spot_price(mut self, spot_price: impl Into<String>) -> Self {
        self.spot_price = Some(spot_price.into());
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

    /// Returns the `WeightedCapacity` member.
    #[must_use]
    pub fn weighted_capacity(&self) -> Option<f64> {
        self.weighted_capacity
    }

    /// Sets the `WeightedCapacity` member, replacing any previous value.
    pub fn set_weighted_capacity(&mut self, weighted_capacity: Option<f64>) {
        self.weighted_capacity = weighted_capacity;
    }

    /// Sets the `WeightedCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_weighted_capacity(mut self, weighted_capacity: impl Into<f64>) -> Self {
        self.weighted_capacity = Some(weighted_capacity.into());
        self
    }

    /// Returns the `TagSpecifications` member.
    #[must_use]
    pub fn tag_specifications(&self) -> Option<&[SpotFleetTagSpecification]> {
        self.tag_specifications.as_deref()
    }

    /// Sets the `TagSpecifications` member, replacing any previous value.
    pub fn set_tag_specifications(
        &mut self,
        tag_specifications: Option<Vec<SpotFleetTagSpecification>>,
    ) {
        self.tag_specifications = tag_specifications;
    }

    /// Appends to the `TagSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_tag_specifications(
        mut self,
        tag_specifications: impl IntoIterator<Item = impl Into<SpotFleetTagSpecification>>,
    ) -> Self {
        self.tag_specifications
            .get_or_insert_with(Vec::new)
            .extend(tag_specifications.into_iter().map(Into::into));
        self
    }
}

impl Shape for SpotFleetLaunchSpecification {
    const SHAPE_NAME: &'static str = "SpotFleetLaunchSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("SecurityGroups", false, self.security_groups.as_ref()),
            Member::new("AddressingType", false, self.addressing_type.as_ref()),
            Member::new("BlockDeviceMappings", false, self.block_device_mappings.as_ref()),
            Member::new("EbsOptimized", false, self.ebs_optimized.as_ref()),
            Member::new("IamInstanceProfile", false, self.iam_instance_profile.as_ref()),
            Member::new("ImageId", false, self.image_id.as_ref()),
            Member::new("InstanceType", false, self.instance_type.as_ref()),
            Member::new("KernelId", false, self.kernel_id.as_ref()),
            Member::new("KeyName", false, self.key_name.as_ref()),
            Member::new("Monitoring", false, self.monitoring.as_ref()),
            Member::new("NetworkInterfaces", false, self.network_interfaces.as_ref()),
            Member::new("Placement", false, self.placement.as_ref()),
            Member::new("RamdiskId", false, self.ramdisk_id.as_ref()),
            Member::new("SpotPrice", false, self.spot_price.as_ref()),
            Member::new("SubnetId", false, self.subnet_id.as_ref()),
            Member::new("UserData", false, self.user_data.as_ref()),
            Member::new("WeightedCapacity", false, self.weighted_capacity.as_ref()),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
        ]
    }
}

impl PartialEq for SpotFleetLaunchSpecification {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for SpotFleetLaunchSpecification {}

impl Hash for SpotFleetLaunchSpecification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for SpotFleetLaunchSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotFleetMonitoring.
///
/// Describes whether monitoring is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotFleetMonitoring {
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl SpotFleetMonitoring {
    /// Returns the `Enabled` member.
    #[must_use]
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Sets the `Enabled` member, replacing any previous value.
    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    /// Sets the `Enabled` member and returns the updated value.
    #[must_use]
    pub fn with_enabled(mut self, enabled: impl Into<bool>) -> Self {
        self.enabled = Some(enabled.into());
        self
    }
}

impl Shape for SpotFleetMonitoring {
    const SHAPE_NAME: &'static str = "SpotFleetMonitoring";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Enabled", false, self.enabled.as_ref()),
        ]
    }
}

impl fmt::Display for SpotFleetMonitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotFleetRequestConfig.
///
/// Describes a Spot Fleet request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotFleetRequestConfig {
    #[serde(rename = "ActivityStatus", skip_serializing_if = "Option::is_none")]
    pub activity_status: Option<ActivityStatus>,
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// The configuration of the Spot Fleet request.
    #[serde(rename = "SpotFleetRequestConfig", skip_serializing_if = "Option::is_none")]
    pub spot_fleet_request_config: Option<SpotFleetRequestConfigData>,
    #[serde(rename = "SpotFleetRequestId", skip_serializing_if = "Option::is_none")]
    pub spot_fleet_request_id: Option<String>,
    /// The state of the Spot Fleet request.
    #[serde(rename = "SpotFleetRequestState", skip_serializing_if = "Option::is_none")]
    pub spot_fleet_request_state: Option<BatchState>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl SpotFleetRequestConfig {
    /// Returns the `ActivityStatus` member.
    #[must_use]
    pub fn activity_status(&self) -> Option<&ActivityStatus> {
        self.activity_status.as_ref()
    }

    /// Sets the `ActivityStatus` member, replacing any previous value.
    pub fn set_activity_status(&mut self, activity_status: Option<ActivityStatus>) {
        self.activity_status = activity_status;
    }

    /// Sets the `ActivityStatus` member and returns the updated value.
    #[must_use]
    pub fn with_activity_status(mut self, activity_status: impl Into<ActivityStatus>) -> Self {
        self.activity_status = Some(activity_status.into());
        self
    }

    /// Returns the `CreateTime` member.
    #[must_use]
    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    /// Sets the `CreateTime` member, replacing any previous value.
    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time;
    }

    /// Sets the `CreateTime` member and returns the updated value.
    #[must_use]
    pub fn with_create_time(mut self, create_time: impl Into<DateTime<Utc>>) -> Self {
        self.create_time = Some(create_time.into());
        self
    }

    /// Returns the `SpotFleetRequestConfig` member.
    #[must_use]
    pub fn spot_fleet_request_config(&self) -> Option<&SpotFleetRequestConfigData> {
        self.spot_fleet_request_config.as_ref()
    }

    /// Sets the `SpotFleetRequestConfig` member, replacing any previous value.
    pub fn set_spot_fleet_request_config(
        &mut self,
        spot_fleet_request_config: Option<SpotFleetRequestConfigData>,
    ) {
        self.spot_fleet_request_config = spot_fleet_request_config;
    }

    /// Sets the `SpotFleetRequestConfig` member and returns the updated value.
    #[must_use]
    pub fn with_spot_fleet_request_config(
        mut self,
        spot_fleet_request_config: impl Into<SpotFleetRequestConfigData>,
    ) -> Self {
        self.spot_fleet_request_config = Some(spot_fleet_request_config.into());
        self
    }

    /// Returns the `SpotFleetRequestId` member.
    #[must_use]
    pub fn spot_fleet_request_id(&self) -> Option<&str> {
        self.spot_fleet_request_id.as_deref()
    }

    /// Sets the `SpotFleetRequestId` member, replacing any previous value.
    pub fn set_spot_fleet_request_id(&mut self, spot_fleet_request_id: Option<String>) {
        self.spot_fleet_request_id = spot_fleet_request_id;
    }

    /// Sets the `SpotFleetRequestId` member and returns the updated value.
    #[must_use]
    pub fn with_spot_fleet_request_id(mut self, spot_fleet_request_id: impl Into<String>) -> Self {
        self.spot_fleet_request_id = Some(spot_fleet_request_id.into());
        self
    }

    /// Returns the `SpotFleetRequestState` member.
    #[must_use]
    pub fn spot_fleet_request_state(&self) -> Option<&BatchState> {
        self.spot_fleet_request_state.as_ref()
    }

    /// Sets the `SpotFleetRequestState` member, replacing any previous value.
    pub fn set_spot_fleet_request_state(&mut self, spot_fleet_request_state: Option<BatchState>) {
        self.spot_fleet_request_state = spot_fleet_request_state;
    }

    /// Sets the `SpotFleetRequestState` member and returns the updated value.
    #[must_use]
    pub fn with_spot_fleet_request_state(
        mut self,
        spot_fleet_request_state: impl Into<BatchState>,
    ) -> Self {
        self.spot_fleet_request_state = Some(spot_fleet_request_state.into());
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

impl Shape for SpotFleetRequestConfig {
    const SHAPE_NAME: &'static str = "SpotFleetRequestConfig";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ActivityStatus", false, self.activity_status.as_ref()),
            Member::new("CreateTime", false, self.create_time.as_ref()),
            Member::new("SpotFleetRequestConfig", false, self.spot_fleet_request_config.as_ref()),
            Member::new("SpotFleetRequestId", false, self.spot_fleet_request_id.as_ref()),
            Member::new("SpotFleetRequestState", false, self.spot_fleet_request_state.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for SpotFleetRequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotFleetRequestConfigData.
///
/// Describes the configuration of a Spot Fleet request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotFleetRequestConfigData {
    /// Indicates how to allocate the target Spot Instance capacity across the Spot Instance pools.
    #[serde(rename = "AllocationStrategy", skip_serializing_if = "Option::is_none")]
    pub allocation_strategy: Option<AllocationStrategy>,
    #[serde(rename = "OnDemandAllocationStrategy", skip_serializing_if = "Option::is_none")]
    pub on_demand_allocation_strategy: Option<OnDemandAllocationStrategy>,
    #[serde(rename = "ClientToken", skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(rename = "ExcessCapacityTerminationPolicy", skip_serializing_if = "Option::is_none")]
    pub excess_capacity_termination_policy: Option<ExcessCapacityTerminationPolicy>,
    /// The number of units fulfilled by this request compared to the set target capacity.
    #[serde(rename = "FulfilledCapacity", skip_serializing_if = "Option::is_none")]
    pub fulfilled_capacity: Option<f64>,
    #[serde(rename = "OnDemandFulfilledCapacity", skip_serializing_if = "Option::is_none")]
    pub on_demand_fulfilled_capacity: Option<f64>,
    /// The Amazon Resource Name (ARN) of an IAM role that grants the Spot Fleet the permission to request, launch, terminate, and tag instances on your behalf.
    #[serde(rename = "IamFleetRole", skip_serializing_if = "Option::is_none")]
    pub iam_fleet_role: Option<String>,
    #[serde(rename = "LaunchSpecifications", skip_serializing_if = "Option::is_none")]
    pub launch_specifications: Option<Vec<SpotFleetLaunchSpecification>>,
    #[serde(rename = "LaunchTemplateConfigs", skip_serializing_if = "Option::is_none")]
    pub launch_template_configs: Option<Vec<LaunchTemplateConfig>>,
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    /// The number of units to request for the Spot Fleet.
    #[serde(rename = "TargetCapacity", skip_serializing_if = "Option::is_none")]
    pub target_capacity: Option<i32>,
    #[serde(rename = "OnDemandTargetCapacity", skip_serializing_if = "Option::is_none")]
    pub on_demand_target_capacity: Option<i32>,
    #[serde(rename = "OnDemandMaxTotalPrice", skip_serializing_if = "Option::is_none")]
    pub on_demand_max_total_price: Option<String>,
    #[serde(rename = "SpotMaxTotalPrice", skip_serializing_if = "Option::is_none")]
    pub spot_max_total_price: Option<String>,
    #[serde(rename = "TerminateInstancesWithExpiration", skip_serializing_if = "Option::is_none")]
    pub terminate_instances_with_expiration: Option<bool>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<FleetType>,
    #[serde(rename = "ValidFrom", skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "ReplaceUnhealthyInstances", skip_serializing_if = "Option::is_none")]
    pub replace_unhealthy_instances: Option<bool>,
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
    #[serde(rename = "LoadBalancersConfig", skip_serializing_if = "Option::is_none")]
    pub load_balancers_config: Option<LoadBalancersConfig>,
    #[serde(rename = "InstancePoolsToUseCount", skip_serializing_if = "Option::is_none")]
    pub instance_pools_to_use_count: Option<i32>,
    #[serde(rename = "TagSpecifications", skip_serializing_if = "Option::is_none")]
    pub tag_specifications: Option<Vec<TagSpecification>>,
}

impl SpotFleetRequestConfigData {
    /// Returns the `AllocationStrategy` member.
    #[must_use]
    pub fn allocation_strategy(&self) -> Option<&AllocationStrategy> {
        self.allocation_strategy.as_ref()
    }

    /// Sets the `AllocationStrategy` member, replacing any previous value.
    pub fn set_allocation_strategy(&mut self, allocation_strategy: Option<AllocationStrategy>) {
        self.allocation_strategy = allocation_strategy;
    }

    /// Sets the `AllocationStrategy` member and returns the updated value.
    #[must_use]
    pub fn with_allocation_strategy(
        mut self,
        allocation_strategy: impl Into<AllocationStrategy>,
    ) -> Self {
        self.allocation_strategy = Some(allocation_strategy.into());
        self
    }

    /// Returns the `OnDemandAllocationStrategy` member.
    #[must_use]
    pub fn on_demand_allocation_strategy(&self) -> Option<&OnDemandAllocationStrategy> {
        self.on_demand_allocation_strategy.as_ref()
    }

    /// Sets the `OnDemandAllocationStrategy` member, replacing any previous value.
    pub fn set_on_demand_allocation_strategy(
        &mut self,
        on_demand_allocation_strategy: Option<OnDemandAllocationStrategy>,
    ) {
        self.on_demand_allocation_strategy = on_demand_allocation_strategy;
    }

    /// Sets the `OnDemandAllocationStrategy` member and returns the updated value.
    #[must_use]
    pub fn with_on_demand_allocation_strategy(
        mut self,
        on_demand_allocation_strategy: impl Into<OnDemandAllocationStrategy>,
    ) -> Self {
        self.on_demand_allocation_strategy = Some(on_demand_allocation_strategy.into());
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

    /// Returns the `ExcessCapacityTerminationPolicy` member.
    #[must_use]
    pub fn excess_capacity_termination_policy(&self) -> Option<&ExcessCapacityTerminationPolicy> {
        self.excess_capacity_termination_policy.as_ref()
    }

    /// Sets the `ExcessCapacityTerminationPolicy` member, replacing any previous value.
    pub fn set_excess_capacity_termination_policy(
        &mut self,
        excess_capacity_termination_policy: Option<ExcessCapacityTerminationPolicy>,
    ) {
        self.excess_capacity_termination_policy = excess_capacity_termination_policy;
    }

    /// Sets the `ExcessCapacityTerminationPolicy` member and returns the updated value.
    #[must_use]
    pub fn with_excess_capacity_termination_policy(
        mut self,
        excess_capacity_termination_policy: impl Into<ExcessCapacityTerminationPolicy>,
    ) -> Self {
        self.excess_capacity_termination_policy = Some(excess_capacity_termination_policy.into());
        self
    }

    /// Returns the `FulfilledCapacity` member.
    #[must_use]
    pub fn fulfilled_capacity(&self) -> Option<f64> {
        self.fulfilled_capacity
    }

    /// Sets the `FulfilledCapacity` member, replacing any previous value.
    pub fn set_fulfilled_capacity(&mut self, fulfilled_capacity: Option<f64>) {
        self.fulfilled_capacity = fulfilled_capacity;
    }

    /// Sets the `FulfilledCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_fulfilled_capacity(mut self, fulfilled_capacity: impl Into<f64>) -> Self {
        self.fulfilled_capacity = Some(fulfilled_capacity.into());
        self
    }

    /// Returns the `OnDemandFulfilledCapacity` member.
    #[must_use]
    pub fn on_demand_fulfilled_capacity(&self) -> Option<f64> {
        self.on_demand_fulfilled_capacity
    }

    /// Sets the `OnDemandFulfilledCapacity` member, replacing any previous value.
    pub fn set_on_demand_fulfilled_capacity(&mut self, on_demand_fulfilled_capacity: Option<f64>) {
        self.on_demand_fulfilled_capacity = on_demand_fulfilled_capacity;
    }

    /// Sets the `OnDemandFulfilledCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_on_demand_fulfilled_capacity(
        mut self,
        on_demand_fulfilled_capacity: impl Into<f64>,
    ) -> Self {
        self.on_demand_fulfilled_capacity = Some(on_demand_fulfilled_capacity.into());
        self
    }

    /// Returns the `IamFleetRole` member.
    #[must_use]
    pub fn iam_fleet_role(&self) -> Option<&str> {
        self.iam_fleet_role.as_deref()
    }

    /// Sets the `IamFleetRole` member, replacing any previous value.
    pub fn set_iam_fleet_role(&mut self, iam_fleet_role: Option<String>) {
        self.iam_fleet_role = iam_fleet_role;
    }

    /// Sets the `IamFleetRole` member and returns the updated value.
    #[must_use]
    pub fn with_iam_fleet_role(mut self, iam_fleet_role: impl Into<String>) -> Self {
        self.iam_fleet_role = Some(iam_fleet_role.into());
        self
    }

    /// Returns the `LaunchSpecifications` member.
    #[must_use]
    pub fn launch_specifications(&self) -> Option<&[SpotFleetLaunchSpecification]> {
        self.launch_specifications.as_deref()
    }

    /// Sets the `LaunchSpecifications` member, replacing any previous value.
    pub fn set_launch_specifications(
        &mut self,
        launch_specifications: Option<Vec<SpotFleetLaunchSpecification>>,
    ) {
        self.launch_specifications = launch_specifications;
    }

    /// Appends to the `LaunchSpecifications` member and returns the updated value.
    #[must_use]
    pub fn with_launch_specifications(
        mut self,
        launch_specifications: impl IntoIterator<Item = impl Into<SpotFleetLaunchSpecification>>,
    ) -> Self {
        self.launch_specifications
            .get_or_insert_with(Vec::new)
            .extend(launch_specifications.into_iter().map(Into::into));
        self
    }

    /// Returns the `LaunchTemplateConfigs` member.
    #[must_use]
    pub fn launch_template_configs(&self) -> Option<&[LaunchTemplateConfig]> {
        self.launch_template_configs.as_deref()
    }

    /// Sets the `LaunchTemplateConfigs` member, replacing any previous value.
    pub fn set_launch_template_configs(
        &mut self,
        launch_template_configs: Option<Vec<LaunchTemplateConfig>>,
    ) {
        self.launch_template_configs = launch_template_configs;
    }

    /// Appends to the `LaunchTemplateConfigs` member and returns the updated value.
    #[must_use]
    pub fn with_launch_template_configs(
        mut self,
        launch_template_configs: impl IntoIterator<Item = impl Into<LaunchTemplateConfig>>,
    ) -> Self {
        self.launch_template_configs
            .get_or_insert_with(Vec::new)
            .extend(launch_template_configs.into_iter().map(Into::into));
        self
    }

    /// Returns the `SpotPrice` member.
    #[must_use]
    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    /// Sets the `SpotPrice` member, replacing any previous value.
    pub fn set_spot_price(&mut self, spot_price: Option<String>) {
        self.spot_price = spot_price;
    }

    /// Sets the `SpotPrice` member and returns the updated value.
    #[must_use]
    pub fn with_spot_price(mut self, spot_price: impl Into<String>) -> Self {
        self.spot_price = Some(spot_price.into());
        self
    }

    /// Returns the `TargetCapacity` member.
    #[must_use]
    pub fn target_capacity(&self) -> Option<i32> {
        self.target_capacity
    }

    /// Sets the `TargetCapacity` member, replacing any previous value.
    pub fn set_target_capacity(&mut self, target_capacity: Option<i32>) {
        self.target_capacity = target_capacity;
    }

    /// Sets the `TargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_target_capacity(mut self, target_capacity: impl Into<i32>) -> Self {
        self.target_capacity = Some(target_capacity.into());
        self
    }

    /// Returns the `OnDemandTargetCapacity` member.
    #[must_use]
    pub fn on_demand_target_capacity(&self) -> Option<i32> {
        self.on_demand_target_capacity
    }

    /// Sets the `OnDemandTargetCapacity` member, replacing any previous value.
    pub fn set_on_demand_target_capacity(&mut self, on_demand_target_capacity: Option<i32>) {
        self.on_demand_target_capacity = on_demand_target_capacity;
    }

    /// Sets the `OnDemandTargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_on_demand_target_capacity(
        mut self,
        on_demand_target_capacity: impl Into<i32>,
    ) -> Self {
        self.on_demand_target_capacity = Some(on_demand_target_capacity.into());
        self
    }

    /// Returns the `OnDemandMaxTotalPrice` member.
    #[must_use]
    pub fn on_demand_max_total_price(&self) -> Option<&str> {
        self.on_demand_max_total_price.as_deref()
    }

    /// Sets the `OnDemandMaxTotalPrice` member, replacing any previous value.
    pub fn set_on_demand_max_total_price(&mut self, on_demand_max_total_price: Option<String>) {
        self.on_demand_max_total_price = on_demand_max_total_price;
    }

    /// Sets the `OnDemandMaxTotalPrice` member and returns the updated value.
    #[must_use]
    pub fn with_on_demand_max_total_price(
        mut self,
        on_demand_max_total_price: impl Into<String>,
    ) -> Self {
        self.on_demand_max_total_price = Some(on_demand_max_total_price.into());
        self
    }

    /// Returns the `SpotMaxTotalPrice` member.
    #[must_use]
    pub fn spot_max_total_price(&self) -> Option<&str> {
        self.spot_max_total_price.as_deref()
    }

    /// Sets the `SpotMaxTotalPrice` member, replacing any previous value.
    pub fn set_spot_max_total_price(&mut self, spot_max_total_price: Option<String>) {
        self.spot_max_total_price = spot_max_total_price;
    }

    /// Sets the `SpotMaxTotalPrice` member and returns the updated value.
    #[must_use]
    pub fn with_spot_max_total_price(mut self, spot_max_total_price: impl Into<String>) -> Self {
        self.spot_max_total_price = Some(spot_max_total_price.into());
        self
    }

    /// Returns the `TerminateInstancesWithExpiration` member.
    #[must_use]
    pub fn terminate_instances_with_expiration(&self) -> Option<bool> {
        self.terminate_instances_with_expiration
    }

    /// Sets the `TerminateInstancesWithExpiration` member, replacing any previous value.
    pub fn set_terminate_instances_with_expiration(
        &mut self,
        terminate_instances_with_expiration: Option<bool>,
    ) {
        self.terminate_instances_with_expiration = terminate_instances_with_expiration;
    }

    /// Sets the `TerminateInstancesWithExpiration` member and returns the updated value.
    #[must_use]
    pub fn with_terminate_instances_with_expiration(
        mut self,
        terminate_instances_with_expiration: impl Into<bool>,
    ) -> Self {
        self.terminate_instances_with_expiration = Some(terminate_instances_with_expiration.into());
        self
    }

    /// Returns the `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&FleetType> {
        self.r#type.as_ref()
    }

    /// Sets the `Type` member, replacing any previous value.
    pub fn set_type(&mut self, r#type: Option<FleetType>) {
        self.r#type = r#type;
    }

    /// Sets the `Type` member and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<FleetType>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Returns the `ValidFrom` member.
    #[must_use]
    pub fn valid_from(&self) -> Option<&DateTime<Utc>> {
        self.valid_from.as_ref()
    }

    /// Sets the `ValidFrom` member, replacing any previous value.
    pub fn set_valid_from(&mut self, valid_from: Option<DateTime<Utc>>) {
        self.valid_from = valid_from;
    }

    /// Sets the `ValidFrom` member and returns the updated value.
    #[must_use]
    pub fn with_valid_from(mut self, valid_from: impl Into<DateTime<Utc>>) -> Self {
        self.valid_from = Some(valid_from.into());
        self
    }

    /// Returns the `ValidUntil` member.
    #[must_use]
    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    /// Sets the `ValidUntil` member, replacing any previous value.
    pub fn set_valid_until(&mut self, valid_until: Option<DateTime<Utc>>) {
        self.valid_until = valid_until;
    }

    /// Sets the `ValidUntil` member and returns the updated value.
    #[must_use]
    pub fn with_valid_until(mut self, valid_until: impl Into<DateTime<Utc>>) -> Self {
        self.valid_until = Some(valid_until.into());
        self
    }

    /// Returns the `ReplaceUnhealthyInstances` member.
    #[must_use]
    pub fn replace_unhealthy_instances(&self) -> Option<bool> {
        self.replace_unhealthy_instances
    }

    /// Sets the `ReplaceUnhealthyInstances` member, replacing any previous value.
    pub fn set_replace_unhealthy_instances(&mut self, replace_unhealthy_instances: Option<bool>) {
        self.replace_unhealthy_instances = replace_unhealthy_instances;
    }

    /// Sets the `ReplaceUnhealthyInstances` member and returns the updated value.
    #[must_use]
    pub fn with_replace_unhealthy_instances(
        mut self,
        replace_unhealthy_instances: impl Into<bool>,
    ) -> Self {
        self.replace_unhealthy_instances = Some(replace_unhealthy_instances.into());
        self
    }

    /// Returns the `InstanceInterruptionBehavior` member.
    #[must_use]
    pub fn instance_interruption_behavior(&self) -> Option<&InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// Sets the `InstanceInterruptionBehavior` member, replacing any previous value.
    pub fn set_instance_interruption_behavior(
        &mut self,
        instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
    ) {
        self.instance_interruption_behavior = instance_interruption_behavior;
    }

    /// Sets the `InstanceInterruptionBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: impl Into<InstanceInterruptionBehavior>,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior.into());
        self
    }

    /// Returns the `LoadBalancersConfig` member.
    #[must_use]
    pub fn load_balancers_config(&self) -> Option<&LoadBalancersConfig> {
        self.load_balancers_config.as_ref()
    }

    /// Sets the `LoadBalancersConfig` member, replacing any previous value.
    pub fn set_load_balancers_config(
        &mut self,
        load_balancers_config: Option<LoadBalancersConfig>,
    ) {
        self.load_balancers_config = load_balancers_config;
    }

    /// Sets the `LoadBalancersConfig` member and returns the updated value.
    #[must_use]
    pub fn with_load_balancers_config(
        mut self,
        load_balancers_config: impl Into<LoadBalancersConfig>,
    ) -> Self {
        self.load_balancers_config = Some(load_balancers_config.into());
        self
    }

    /// Returns the `InstancePoolsToUseCount` member.
    #[must_use]
    pub fn instance_pools_to_use_count(&self) -> Option<i32> {
        self.instance_pools_to_use_count
    }

    /// Sets the `InstancePoolsToUseCount` member, replacing any previous value.
    pub fn set_instance_pools_to_use_count(&mut self, instance_pools_to_use_count: Option<i32>) {
        self.instance_pools_to_use_count = instance_pools_to_use_count;
    }

    /// Sets the `InstancePoolsToUseCount` member and returns the updated value.
    #[must_use]
    pub fn with_instance_pools_to_use_count(
        mut self,
        instance_pools_to_use_count: impl Into<i32>,
    ) -> Self {
        self.instance_pools_to_use_count = Some(instance_pools_to_use_count.into());
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

impl Shape for SpotFleetRequestConfigData {
    const SHAPE_NAME: &'static str = "SpotFleetRequestConfigData";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AllocationStrategy", false, self.allocation_strategy.as_ref()),
            Member::new(
                "OnDemandAllocationStrategy",
                false,
                self.on_demand_allocation_strategy.as_ref(),
            ),
            Member::new("ClientToken", false, self.client_token.as_ref()),
            Member::new(
                "ExcessCapacityTerminationPolicy",
                false,
                self.excess_capacity_termination_policy.as_ref(),
            ),
            Member::new("FulfilledCapacity", false, self.fulfilled_capacity.as_ref()),
            Member::new(
                "OnDemandFulfilledCapacity",
                false,
                self.on_demand_fulfilled_capacity.as_ref(),
            ),
            Member::new("IamFleetRole", true, self.iam_fleet_role.as_ref()),
            Member::new("LaunchSpecifications", false, self.launch_specifications.as_ref()),
            Member::new("LaunchTemplateConfigs", false, self.launch_template_configs.as_ref()),
            Member::new("SpotPrice", false, self.spot_price.as_ref()),
            Member::new("TargetCapacity", true, self.target_capacity.as_ref()),
            Member::new("OnDemandTargetCapacity", false, self.on_demand_target_capacity.as_ref()),
            Member::new("OnDemandMaxTotalPrice", false, self.on_demand_max_total_price.as_ref()),
            Member::new("SpotMaxTotalPrice", false, self.spot_max_total_price.as_ref()),
            Member::new(
                "TerminateInstancesWithExpiration",
                false,
                self.terminate_instances_with_expiration.as_ref(),
            ),
            Member::new("Type", false, self.r#type.as_ref()),
            Member::new("ValidFrom", false, self.valid_from.as_ref()),
            Member::new("ValidUntil", false, self.valid_until.as_ref()),
            Member::new(
                "ReplaceUnhealthyInstances",
                false,
                self.replace_unhealthy_instances.as_ref(),
            ),
            Member::new(
                "InstanceInterruptionBehavior",
                false,
                self.instance_interruption_behavior.as_ref(),
            ),
            Member::new("LoadBalancersConfig", false, self.load_balancers_config.as_ref()),
            Member::new(
                "InstancePoolsToUseCount",
                false,
                self.instance_pools_to_use_count.as_ref(),
            ),
            Member::new("TagSpecifications", false, self.tag_specifications.as_ref()),
        ]
    }
}

impl PartialEq for SpotFleetRequestConfigData {
    fn eq(&self, other: &Self) -> bool {
        Shape::members(self) == Shape::members(other)
    }
}

impl Eq for SpotFleetRequestConfigData {}

impl Hash for SpotFleetRequestConfigData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Shape::shape_hash(self));
    }
}

impl fmt::Display for SpotFleetRequestConfigData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotFleetTagSpecification.
///
/// The tags for a Spot Fleet resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotFleetTagSpecification {
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl SpotFleetTagSpecification {
    /// Returns the `ResourceType` member.
    #[must_use]
    pub fn resource_type(&self) -> Option<&ResourceType> {
        self.resource_type.as_ref()
    }

    /// Sets the `ResourceType` member, replacing any previous value.
    pub fn set_resource_type(&mut self, resource_type: Option<ResourceType>) {
        self.resource_type = resource_type;
    }

    /// Sets the `ResourceType` member and returns the updated value.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: impl Into<ResourceType>) -> Self {
        self.resource_type = Some(resource_type.into());
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

impl Shape for SpotFleetTagSpecification {
    const SHAPE_NAME: &'static str = "SpotFleetTagSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ResourceType", false, self.resource_type.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for SpotFleetTagSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotInstanceRequest.
///
/// Describes a Spot Instance request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotInstanceRequest {
    #[serde(rename = "ActualBlockHourlyPrice", skip_serializing_if = "Option::is_none")]
    pub actual_block_hourly_price: Option<String>,
    #[serde(rename = "AvailabilityZoneGroup", skip_serializing_if = "Option::is_none")]
    pub availability_zone_group: Option<String>,
    #[serde(rename = "BlockDurationMinutes", skip_serializing_if = "Option::is_none")]
    pub block_duration_minutes: Option<i32>,
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(rename = "Fault", skip_serializing_if = "Option::is_none")]
    pub fault: Option<SpotInstanceStateFault>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "LaunchGroup", skip_serializing_if = "Option::is_none")]
    pub launch_group: Option<String>,
    #[serde(rename = "LaunchSpecification", skip_serializing_if = "Option::is_none")]
    pub launch_specification: Option<LaunchSpecification>,
    #[serde(rename = "LaunchedAvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub launched_availability_zone: Option<String>,
    #[serde(rename = "ProductDescription", skip_serializing_if = "Option::is_none")]
    pub product_description: Option<RIProductDescription>,
    #[serde(rename = "SpotInstanceRequestId", skip_serializing_if = "Option::is_none")]
    pub spot_instance_request_id: Option<String>,
    /// The maximum price per hour that you are willing to pay for a Spot Instance.
    #[serde(rename = "SpotPrice", skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    /// The state of the Spot Instance request.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<SpotInstanceState>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<SpotInstanceStatus>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SpotInstanceType>,
    #[serde(rename = "ValidFrom", skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
}

impl SpotInstanceRequest {
    /// Returns the `ActualBlockHourlyPrice` member.
    #[must_use]
    pub fn actual_block_hourly_price(&self) -> Option<&str> {
        self.actual_block_hourly_price.as_deref()
    }

    /// Sets the `ActualBlockHourlyPrice` member, replacing any previous value.
    pub fn set_actual_block_hourly_price(&mut self, actual_block_hourly_price: Option<String>) {
        self.actual_block_hourly_price = actual_block_hourly_price;
    }

    /// Sets the `ActualBlockHourlyPrice` member and returns the updated value.
    #[must_use]
    pub fn with_actual_block_hourly_price(
        mut self,
        actual_block_hourly_price: impl Into<String>,
    ) -> Self {
        self.actual_block_hourly_price = Some(actual_block_hourly_price.into());
        self
    }

    /// Returns the `AvailabilityZoneGroup` member.
    #[must_use]
    pub fn availability_zone_group(&self) -> Option<&str> {
        self.availability_zone_group.as_deref()
    }

    /// Sets the `AvailabilityZoneGroup` member, replacing any previous value.
    pub fn set_availability_zone_group(&mut self, availability_zone_group: Option<String>) {
        self.availability_zone_group = availability_zone_group;
    }

    /// Sets the `AvailabilityZoneGroup` member and returns the updated value.
    #[must_use]
    pub fn with_availability_zone_group(
        mut self,
        availability_zone_group: impl Into<String>,
    ) -> Self {
        self.availability_zone_group = Some(availability_zone_group.into());
        self
    }

    /// Returns the `BlockDurationMinutes` member.
    #[must_use]
    pub fn block_duration_minutes(&self) -> Option<i32> {
        self.block_duration_minutes
    }

    /// Sets the `BlockDurationMinutes` member, replacing any previous value.
    pub fn set_block_duration_minutes(&mut self, block_duration_minutes: Option<i32>) {
        self.block_duration_minutes = block_duration_minutes;
    }

    /// Sets the `BlockDurationMinutes` member and returns the updated value.
    #[must_use]
    pub fn with_block_duration_minutes(mut self, block_duration_minutes: impl Into<i32>) -> Self {
        self.block_duration_minutes = Some(block_duration_minutes.into());
        self
    }

    /// Returns the `CreateTime` member.
    #[must_use]
    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    /// Sets the `CreateTime` member, replacing any previous value.
    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time;
    }

    /// Sets the `CreateTime` member and returns the updated value.
    #[must_use]
    pub fn with_create_time(mut self, create_time: impl Into<DateTime<Utc>>) -> Self {
        self.create_time = Some(create_time.into());
        self
    }

    /// Returns the `Fault` member.
    #[must_use]
    pub fn fault(&self) -> Option<&SpotInstanceStateFault> {
        self.fault.as_ref()
    }

    /// Sets the `Fault` member, replacing any previous value.
    pub fn set_fault(&mut self, fault: Option<SpotInstanceStateFault>) {
        self.fault = fault;
    }

    /// Sets the `Fault` member and returns the updated value.
    #[must_use]
    pub fn with_fault(mut self, fault: impl Into<SpotInstanceStateFault>) -> Self {
        self.fault = Some(fault.into());
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

    /// Returns the `LaunchGroup` member.
    #[must_use]
    pub fn launch_group(&self) -> Option<&str> {
        self.launch_group.as_deref()
    }

    /// Sets the `LaunchGroup` member, replacing any previous value.
    pub fn set_launch_group(&mut self, launch_group: Option<String>) {
        self.launch_group = launch_group;
    }

    /// Sets the `LaunchGroup` member and returns the updated value.
    #[must_use]
    pub fn with_launch_group(mut self, launch_group: impl Into<String>) -> Self {
        self.launch_group = Some(launch_group.into());
        self
    }

    /// Returns the `LaunchSpecification` member.
    #[must_use]
    pub fn launch_specification(&self) -> Option<&LaunchSpecification> {
        self.launch_specification.as_ref()
    }

    /// Sets the `LaunchSpecification` member, replacing any previous value.
    pub fn set_launch_specification(&mut self, launch_specification: Option<LaunchSpecification>) {
        self.launch_specification = launch_specification;
    }

    /// Sets the `LaunchSpecification` member and returns the updated value.
    #[must_use]
    pub fn with_launch_specification(
        mut self,
        launch_specification: impl Into<LaunchSpecification>,
    ) -> Self {
        self.launch_specification = Some(launch_specification.into());
        self
    }

    /// Returns the `LaunchedAvailabilityZone` member.
    #[must_use]
    pub fn launched_availability_zone(&self) -> Option<&str> {
        self.launched_availability_zone.as_deref()
    }

    /// Sets the `LaunchedAvailabilityZone` member, replacing any previous value.
    pub fn set_launched_availability_zone(&mut self, launched_availability_zone: Option<String>) {
        self.launched_availability_zone = launched_availability_zone;
    }

    /// Sets the `LaunchedAvailabilityZone` member and returns the updated value.
    #[must_use]
    pub fn with_launched_availability_zone(
        mut self,
        launched_availability_zone: impl Into<String>,
    ) -> Self {
        self.launched_availability_zone = Some(launched_availability_zone.into());
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

    /// Returns the `SpotInstanceRequestId` member.
    #[must_use]
    pub fn spot_instance_request_id(&self) -> Option<&str> {
        self.spot_instance_request_id.as_deref()
    }

    /// Sets the `SpotInstanceRequestId` member, replacing any previous value.
    pub fn set_spot_instance_request_id(&mut self, spot_instance_request_id: Option<String>) {
        self.spot_instance_request_id = spot_instance_request_id;
    }

    /// Sets the `SpotInstanceRequestId` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_request_id(
        mut self,
        spot_instance_request_id: impl Into<String>,
    ) -> Self {
        self.spot_instance_request_id = Some(spot_instance_request_id.into());
        self
    }

    /// Returns the `SpotPrice` member.
    #[must_use]
    pub fn spot_price(&self) -> Option<&str> {
        self.spot_price.as_deref()
    }

    /// Sets the `SpotPrice` member, replacing any previous value.
    pub fn set_spot_price(&mut self, spot_price: Option<String>) {
        self.spot_price = spot_price;
    }

    /// Sets the `SpotPrice` member and returns the updated value.
    #[must_use]
    pub fn with_spot_price(mut self, spot_price: impl Into<String>) -> Self {
        self.spot_price = Some(spot_price.into());
        self
    }

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&SpotInstanceState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<SpotInstanceState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<SpotInstanceState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&SpotInstanceStatus> {
        self.status.as_ref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<SpotInstanceStatus>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<SpotInstanceStatus>) -> Self {
        self.status = Some(status.into());
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

    /// Returns the `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&SpotInstanceType> {
        self.r#type.as_ref()
    }

    /// Sets the `Type` member, replacing any previous value.
    pub fn set_type(&mut self, r#type: Option<SpotInstanceType>) {
        self.r#type = r#type;
    }

    /// Sets the `Type` member and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<SpotInstanceType>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Returns the `ValidFrom` member.
    #[must_use]
    pub fn valid_from(&self) -> Option<&DateTime<Utc>> {
        self.valid_from.as_ref()
    }

    /// Sets the `ValidFrom` member, replacing any previous value.
    pub fn set_valid_from(&mut self, valid_from: Option<DateTime<Utc>>) {
        self.valid_from = valid_from;
    }

    /// Sets the `ValidFrom` member and returns the updated value.
    #[must_use]
    pub fn with_valid_from(mut self, valid_from: impl Into<DateTime<Utc>>) -> Self {
        self.valid_from = Some(valid_from.into());
        self
    }

    /// Returns the `ValidUntil` member.
    #[must_use]
    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    /// Sets the `ValidUntil` member, replacing any previous value.
    pub fn set_valid_until(&mut self, valid_until: Option<DateTime<Utc>>) {
        self.valid_until = valid_until;
    }

    /// Sets the `ValidUntil` member and returns the updated value.
    #[must_use]
    pub fn with_valid_until(mut self, valid_until: impl Into<DateTime<Utc>>) -> Self {
        self.valid_until = Some(valid_until.into());
        self
    }

    /// Returns the `InstanceInterruptionBehavior` member.
    #[must_use]
    pub fn instance_interruption_behavior(&self) -> Option<&InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// Sets the `InstanceInterruptionBehavior` member, replacing any previous value.
    pub fn set_instance_interruption_behavior(
        &mut self,
        instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
    ) {
        self.instance_interruption_behavior = instance_interruption_behavior;
    }

    /// Sets the `InstanceInterruptionBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: impl Into<InstanceInterruptionBehavior>,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior.into());
        self
    }
}

impl Shape for SpotInstanceRequest {
    const SHAPE_NAME: &'static str = "SpotInstanceRequest";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ActualBlockHourlyPrice", false, self.actual_block_hourly_price.as_ref()),
            Member::new("AvailabilityZoneGroup", false, self.availability_zone_group.as_ref()),
            Member::new("BlockDurationMinutes", false, self.block_duration_minutes.as_ref()),
            Member::new("CreateTime", false, self.create_time.as_ref()),
            Member::new("Fault", false, self.fault.as_ref()),
            Member::new("InstanceId", false, self.instance_id.as_ref()),
            Member::new("LaunchGroup", false, self.launch_group.as_ref()),
            Member::new("LaunchSpecification", false, self.launch_specification.as_ref()),
            Member::new(
                "LaunchedAvailabilityZone",
                false,
                self.launched_availability_zone.as_ref(),
            ),
            Member::new("ProductDescription", false, self.product_description.as_ref()),
            Member::new("SpotInstanceRequestId", false, self.spot_instance_request_id.as_ref()),
            Member::new("SpotPrice", false, self.spot_price.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("Type", false, self.r#type.as_ref()),
            Member::new("ValidFrom", false, self.valid_from.as_ref()),
            Member::new("ValidUntil", false, self.valid_until.as_ref()),
            Member::new(
                "InstanceInterruptionBehavior",
                false,
                self.instance_interruption_behavior.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for SpotInstanceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotInstanceStateFault.
///
/// Describes a Spot Instance state change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotInstanceStateFault {
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SpotInstanceStateFault {
    /// Returns the `Code` member.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Sets the `Code` member, replacing any previous value.
    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code;
    }

    /// Sets the `Code` member and returns the updated value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the `Message` member.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Sets the `Message` member, replacing any previous value.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Sets the `Message` member and returns the updated value.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Shape for SpotInstanceStateFault {
    const SHAPE_NAME: &'static str = "SpotInstanceStateFault";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Code", false, self.code.as_ref()),
            Member::new("Message", false, self.message.as_ref()),
        ]
    }
}

impl fmt::Display for SpotInstanceStateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotInstanceStatus.
///
/// Describes the status of a Spot Instance request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotInstanceStatus {
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "UpdateTime", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

impl SpotInstanceStatus {
    /// Returns the `Code` member.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Sets the `Code` member, replacing any previous value.
    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code;
    }

    /// Sets the `Code` member and returns the updated value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the `Message` member.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Sets the `Message` member, replacing any previous value.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Sets the `Message` member and returns the updated value.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the `UpdateTime` member.
    #[must_use]
    pub fn update_time(&self) -> Option<&DateTime<Utc>> {
        self.update_time.as_ref()
    }

    /// Sets the `UpdateTime` member, replacing any previous value.
    pub fn set_update_time(&mut self, update_time: Option<DateTime<Utc>>) {
        self.update_time = update_time;
    }

    /// Sets the `UpdateTime` member and returns the updated value.
    #[must_use]
    pub fn with_update_time(mut self, update_time: impl Into<DateTime<Utc>>) -> Self {
        self.update_time = Some(update_time.into());
        self
    }
}

impl Shape for SpotInstanceStatus {
    const SHAPE_NAME: &'static str = "SpotInstanceStatus";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Code", false, self.code.as_ref()),
            Member::new("Message", false, self.message.as_ref()),
            Member::new("UpdateTime", false, self.update_time.as_ref()),
        ]
    }
}

impl fmt::Display for SpotInstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotMarketOptions.
///
/// The options for Spot Instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotMarketOptions {
    /// The maximum hourly price you are willing to pay for the Spot Instances.
    #[serde(rename = "MaxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
    #[serde(rename = "SpotInstanceType", skip_serializing_if = "Option::is_none")]
    pub spot_instance_type: Option<SpotInstanceType>,
    #[serde(rename = "BlockDurationMinutes", skip_serializing_if = "Option::is_none")]
    pub block_duration_minutes: Option<i32>,
    #[serde(rename = "ValidUntil", skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
}

impl SpotMarketOptions {
    /// Returns the `MaxPrice` member.
    #[must_use]
    pub fn max_price(&self) -> Option<&str> {
        self.max_price.as_deref()
    }

    /// Sets the `MaxPrice` member, replacing any previous value.
    pub fn set_max_price(&mut self, max_price: Option<String>) {
        self.max_price = max_price;
    }

    /// Sets the `MaxPrice` member and returns the updated value.
    #[must_use]
    pub fn with_max_price(mut self, max_price: impl Into<String>) -> Self {
        self.max_price = Some(max_price.into());
        self
    }

    /// Returns the `SpotInstanceType` member.
    #[must_use]
    pub fn spot_instance_type(&self) -> Option<&SpotInstanceType> {
        self.spot_instance_type.as_ref()
    }

    /// Sets the `SpotInstanceType` member, replacing any previous value.
    pub fn set_spot_instance_type(&mut self, spot_instance_type: Option<SpotInstanceType>) {
        self.spot_instance_type = spot_instance_type;
    }

    /// Sets the `SpotInstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_spot_instance_type(
        mut self,
        spot_instance_type: impl Into<SpotInstanceType>,
    ) -> Self {
        self.spot_instance_type = Some(spot_instance_type.into());
        self
    }

    /// Returns the `BlockDurationMinutes` member.
    #[must_use]
    pub fn block_duration_minutes(&self) -> Option<i32> {
        self.block_duration_minutes
    }

    /// Sets the `BlockDurationMinutes` member, replacing any previous value.
    pub fn set_block_duration_minutes(&mut self, block_duration_minutes: Option<i32>) {
        self.block_duration_minutes = block_duration_minutes;
    }

    /// Sets the `BlockDurationMinutes` member and returns the updated value.
    #[must_use]
    pub fn with_block_duration_minutes(mut self, block_duration_minutes: impl Into<i32>) -> Self {
        self.block_duration_minutes = Some(block_duration_minutes.into());
        self
    }

    /// Returns the `ValidUntil` member.
    #[must_use]
    pub fn valid_until(&self) -> Option<&DateTime<Utc>> {
        self.valid_until.as_ref()
    }

    /// Sets the `ValidUntil` member, replacing any previous value.
    pub fn set_valid_until(&mut self, valid_until: Option<DateTime<Utc>>) {
        self.valid_until = valid_until;
    }

    /// Sets the `ValidUntil` member and returns the updated value.
    #[must_use]
    pub fn with_valid_until(mut self, valid_until: impl Into<DateTime<Utc>>) -> Self {
        self.valid_until = Some(valid_until.into());
        self
    }

    /// Returns the `InstanceInterruptionBehavior` member.
    #[must_use]
    pub fn instance_interruption_behavior(&self) -> Option<&InstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// Sets the `InstanceInterruptionBehavior` member, replacing any previous value.
    pub fn set_instance_interruption_behavior(
        &mut self,
        instance_interruption_behavior: Option<InstanceInterruptionBehavior>,
    ) {
        self.instance_interruption_behavior = instance_interruption_behavior;
    }

    /// Sets the `InstanceInterruptionBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: impl Into<InstanceInterruptionBehavior>,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior.into());
        self
    }
}

impl Shape for SpotMarketOptions {
    const SHAPE_NAME: &'static str = "SpotMarketOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("MaxPrice", false, self.max_price.as_ref()),
            Member::new("SpotInstanceType", false, self.spot_instance_type.as_ref()),
            Member::new("BlockDurationMinutes", false, self.block_duration_minutes.as_ref()),
            Member::new("ValidUntil", false, self.valid_until.as_ref()),
            Member::new(
                "InstanceInterruptionBehavior",
                false,
                self.instance_interruption_behavior.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for SpotMarketOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotOptions.
///
/// Describes the configuration of Spot Instances in an EC2 Fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotOptions {
    #[serde(rename = "AllocationStrategy", skip_serializing_if = "Option::is_none")]
    pub allocation_strategy: Option<SpotAllocationStrategy>,
    #[serde(rename = "InstanceInterruptionBehavior", skip_serializing_if = "Option::is_none")]
    pub instance_interruption_behavior: Option<SpotInstanceInterruptionBehavior>,
    #[serde(rename = "InstancePoolsToUseCount", skip_serializing_if = "Option::is_none")]
    pub instance_pools_to_use_count: Option<i32>,
    #[serde(rename = "SingleInstanceType", skip_serializing_if = "Option::is_none")]
    pub single_instance_type: Option<bool>,
    #[serde(rename = "SingleAvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub single_availability_zone: Option<bool>,
    #[serde(rename = "MinTargetCapacity", skip_serializing_if = "Option::is_none")]
    pub min_target_capacity: Option<i32>,
    #[serde(rename = "MaxTotalPrice", skip_serializing_if = "Option::is_none")]
    pub max_total_price: Option<String>,
}

impl SpotOptions {
    /// Returns the `AllocationStrategy` member.
    #[must_use]
    pub fn allocation_strategy(&self) -> Option<&SpotAllocationStrategy> {
        self.allocation_strategy.as_ref()
    }

    /// Sets the `AllocationStrategy` member, replacing any previous value.
    pub fn set_allocation_strategy(&mut self, allocation_strategy: Option<SpotAllocationStrategy>) {
        self.allocation_strategy = allocation_strategy;
    }

    /// Sets the `AllocationStrategy` member and returns the updated value.
    #[must_use]
    pub fn with_allocation_strategy(
        mut self,
        allocation_strategy: impl Into<SpotAllocationStrategy>,
    ) -> Self {
        self.allocation_strategy = Some(allocation_strategy.into());
        self
    }

    /// Returns the `InstanceInterruptionBehavior` member.
    #[must_use]
    pub fn instance_interruption_behavior(&self) -> Option<&SpotInstanceInterruptionBehavior> {
        self.instance_interruption_behavior.as_ref()
    }

    /// Sets the `InstanceInterruptionBehavior` member, replacing any previous value.
    pub fn set_instance_interruption_behavior(
        &mut self,
        instance_interruption_behavior: Option<SpotInstanceInterruptionBehavior>,
    ) {
        self.instance_interruption_behavior = instance_interruption_behavior;
    }

    /// Sets the `InstanceInterruptionBehavior` member and returns the updated value.
    #[must_use]
    pub fn with_instance_interruption_behavior(
        mut self,
        instance_interruption_behavior: impl Into<SpotInstanceInterruptionBehavior>,
    ) -> Self {
        self.instance_interruption_behavior = Some(instance_interruption_behavior.into());
        self
    }

    /// Returns the `InstancePoolsToUseCount` member.
    #[must_use]
    pub fn instance_pools_to_use_count(&self) -> Option<i32> {
        self.instance_pools_to_use_count
    }

    /// Sets the `InstancePoolsToUseCount` member, replacing any previous value.
    pub fn set_instance_pools_to_use_count(&mut self, instance_pools_to_use_count: Option<i32>) {
        self.instance_pools_to_use_count = instance_pools_to_use_count;
    }

    /// Sets the `InstancePoolsToUseCount` member and returns the updated value.
    #[must_use]
    pub fn with_instance_pools_to_use_count(
        mut self,
        instance_pools_to_use_count: impl Into<i32>,
    ) -> Self {
        self.instance_pools_to_use_count = Some(instance_pools_to_use_count.into());
        self
    }

    /// Returns the `SingleInstanceType` member.
    #[must_use]
    pub fn single_instance_type(&self) -> Option<bool> {
        self.single_instance_type
    }

    /// Sets the `SingleInstanceType` member, replacing any previous value.
    pub fn set_single_instance_type(&mut self, single_instance_type: Option<bool>) {
        self.single_instance_type = single_instance_type;
    }

    /// Sets the `SingleInstanceType` member and returns the updated value.
    #[must_use]
    pub fn with_single_instance_type(mut self, single_instance_type: impl Into<bool>) -> Self {
        self.single_instance_type = Some(single_instance_type.into());
        self
    }

    /// Returns the `SingleAvailabilityZone` member.
    #[must_use]
    pub fn single_availability_zone(&self) -> Option<bool> {
        self.single_availability_zone
    }

    /// Sets the `SingleAvailabilityZone` member, replacing any previous value.
    pub fn set_single_availability_zone(&mut self, single_availability_zone: Option<bool>) {
        self.single_availability_zone = single_availability_zone;
    }

    /// Sets the `SingleAvailabilityZone` member and returns the updated value.
    #[must_use]
    pub fn with_single_availability_zone(
        mut self,
        single_availability_zone: impl Into<bool>,
    ) -> Self {
        self.single_availability_zone = Some(single_availability_zone.into());
        self
    }

    /// Returns the `MinTargetCapacity` member.
    #[must_use]
    pub fn min_target_capacity(&self) -> Option<i32> {
        self.min_target_capacity
    }

    /// Sets the `MinTargetCapacity` member, replacing any previous value.
    pub fn set_min_target_capacity(&mut self, min_target_capacity: Option<i32>) {
        self.min_target_capacity = min_target_capacity;
    }

    /// Sets the `MinTargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_min_target_capacity(mut self, min_target_capacity: impl Into<i32>) -> Self {
        self.min_target_capacity = Some(min_target_capacity.into());
        self
    }

    /// Returns the `MaxTotalPrice` member.
    #[must_use]
    pub fn max_total_price(&self) -> Option<&str> {
        self.max_total_price.as_deref()
    }

    /// Sets the `MaxTotalPrice` member, replacing any previous value.
    pub fn set_max_total_price(&mut self, max_total_price: Option<String>) {
        self.max_total_price = max_total_price;
    }

    /// Sets the `MaxTotalPrice` member and returns the updated value.
    #[must_use]
    pub fn with_max_total_price(mut self, max_total_price: impl Into<String>) -> Self {
        self.max_total_price = Some(max_total_price.into());
        self
    }
}

impl Shape for SpotOptions {
    const SHAPE_NAME: &'static str = "SpotOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AllocationStrategy", false, self.allocation_strategy.as_ref()),
            Member::new(
                "InstanceInterruptionBehavior",
                false,
                self.instance_interruption_behavior.as_ref(),
            ),
            Member::new(
                "InstancePoolsToUseCount",
                false,
                self.instance_pools_to_use_count.as_ref(),
            ),
            Member::new("SingleInstanceType", false, self.single_instance_type.as_ref()),
            Member::new("SingleAvailabilityZone", false, self.single_availability_zone.as_ref()),
            Member::new("MinTargetCapacity", false, self.min_target_capacity.as_ref()),
            Member::new("MaxTotalPrice", false, self.max_total_price.as_ref()),
        ]
    }
}

impl fmt::Display for SpotOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 SpotPlacement.
///
/// Describes Spot Instance placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpotPlacement {
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "Tenancy", skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Tenancy>,
}

impl SpotPlacement {
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

    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `Tenancy` member.
    #[must_use]
    pub fn tenancy(&self) -> Option<&Tenancy> {
        self.tenancy.as_ref()
    }

    /// Sets the `Tenancy` member, replacing any previous value.
    pub fn set_tenancy(&mut self, tenancy: Option<Tenancy>) {
        self.tenancy = tenancy;
    }

    /// Sets the `Tenancy` member and returns the updated value.
    #[must_use]
    pub fn with_tenancy(mut self, tenancy: impl Into<Tenancy>) -> Self {
        self.tenancy = Some(tenancy.into());
        self
    }
}

impl Shape for SpotPlacement {
    const SHAPE_NAME: &'static str = "SpotPlacement";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("Tenancy", false, self.tenancy.as_ref()),
        ]
    }
}

impl fmt::Display for SpotPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 StateReason.
///
/// Describes a state change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateReason {
    /// The reason code for the state change.
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The message for the state change.
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StateReason {
    /// Returns the `Code` member.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Sets the `Code` member, replacing any previous value.
    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code;
    }

    /// Sets the `Code` member and returns the updated value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the `Message` member.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Sets the `Message` member, replacing any previous value.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Sets the `Message` member and returns the updated value.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Shape for StateReason {
    const SHAPE_NAME: &'static str = "StateReason";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Code", false, self.code.as_ref()),
            Member::new("Message", false, self.message.as_ref()),
        ]
    }
}

impl fmt::Display for StateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Tag.
///
/// Describes a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// The key of the tag.
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The value of the tag.
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Returns the `Key` member.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Sets the `Key` member, replacing any previous value.
    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }

    /// Sets the `Key` member and returns the updated value.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Returns the `Value` member.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the `Value` member, replacing any previous value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    /// Sets the `Value` member and returns the updated value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Shape for Tag {
    const SHAPE_NAME: &'static str = "Tag";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Key", false, self.key.as_ref()),
            Member::new("Value", false, self.value.as_ref()),
        ]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 TagSpecification.
///
/// The tags to apply to a resource when the resource is being created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSpecification {
    /// The type of resource to tag on creation.
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
    /// The tags to apply to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TagSpecification {
    /// Returns the `ResourceType` member.
    #[must_use]
    pub fn resource_type(&self) -> Option<&ResourceType> {
        self.resource_type.as_ref()
    }

    /// Sets the `ResourceType` member, replacing any previous value.
    pub fn set_resource_type(&mut self, resource_type: Option<ResourceType>) {
        self.resource_type = resource_type;
    }

    /// Sets the `ResourceType` member and returns the updated value.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: impl Into<ResourceType>) -> Self {
        self.resource_type = Some(resource_type.into());
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

impl Shape for TagSpecification {
    const SHAPE_NAME: &'static str = "TagSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("ResourceType", false, self.resource_type.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
        ]
    }
}

impl fmt::Display for TagSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 TargetCapacitySpecification.
///
/// The number of units to request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetCapacitySpecification {
    #[serde(rename = "TotalTargetCapacity", skip_serializing_if = "Option::is_none")]
    pub total_target_capacity: Option<i32>,
    #[serde(rename = "OnDemandTargetCapacity", skip_serializing_if = "Option::is_none")]
    pub on_demand_target_capacity: Option<i32>,
    #[serde(rename = "SpotTargetCapacity", skip_serializing_if = "Option::is_none")]
    pub spot_target_capacity: Option<i32>,
    #[serde(rename = "DefaultTargetCapacityType", skip_serializing_if = "Option::is_none")]
    pub default_target_capacity_type: Option<DefaultTargetCapacityType>,
}

impl TargetCapacitySpecification {
    /// Returns the `TotalTargetCapacity` member.
    #[must_use]
    pub fn total_target_capacity(&self) -> Option<i32> {
        self.total_target_capacity
    }

    /// Sets the `TotalTargetCapacity` member, replacing any previous value.
    pub fn set_total_target_capacity(&mut self, total_target_capacity: Option<i32>) {
        self.total_target_capacity = total_target_capacity;
    }

    /// Sets the `TotalTargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_total_target_capacity(mut self, total_target_capacity: impl Into<i32>) -> Self {
        self.total_target_capacity = Some(total_target_capacity.into());
        self
    }

    /// Returns the `OnDemandTargetCapacity` member.
    #[must_use]
    pub fn on_demand_target_capacity(&self) -> Option<i32> {
        self.on_demand_target_capacity
    }

    /// Sets the `OnDemandTargetCapacity` member, replacing any previous value.
    pub fn set_on_demand_target_capacity(&mut self, on_demand_target_capacity: Option<i32>) {
        self.on_demand_target_capacity = on_demand_target_capacity;
    }

    /// Sets the `OnDemandTargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_on_demand_target_capacity(
        mut self,
        on_demand_target_capacity: impl Into<i32>,
    ) -> Self {
        self.on_demand_target_capacity = Some(on_demand_target_capacity.into());
        self
    }

    /// Returns the `SpotTargetCapacity` member.
    #[must_use]
    pub fn spot_target_capacity(&self) -> Option<i32> {
        self.spot_target_capacity
    }

    /// Sets the `SpotTargetCapacity` member, replacing any previous value.
    pub fn set_spot_target_capacity(&mut self, spot_target_capacity: Option<i32>) {
        self.spot_target_capacity = spot_target_capacity;
    }

    /// Sets the `SpotTargetCapacity` member and returns the updated value.
    #[must_use]
    pub fn with_spot_target_capacity(mut self, spot_target_capacity: impl Into<i32>) -> Self {
        self.spot_target_capacity = Some(spot_target_capacity.into());
        self
    }

    /// Returns the `DefaultTargetCapacityType` member.
    #[must_use]
    pub fn default_target_capacity_type(&self) -> Option<&DefaultTargetCapacityType> {
        self.default_target_capacity_type.as_ref()
    }

    /// Sets the `DefaultTargetCapacityType` member, replacing any previous value.
    pub fn set_default_target_capacity_type(
        &mut self,
        default_target_capacity_type: Option<DefaultTargetCapacityType>,
    ) {
        self.default_target_capacity_type = default_target_capacity_type;
    }

    /// Sets the `DefaultTargetCapacityType` member and returns the updated value.
    #[must_use]
    pub fn with_default_target_capacity_type(
        mut self,
        default_target_capacity_type: impl Into<DefaultTargetCapacityType>,
    ) -> Self {
        self.default_target_capacity_type = Some(default_target_capacity_type.into());
        self
    }
}

impl Shape for TargetCapacitySpecification {
    const SHAPE_NAME: &'static str = "TargetCapacitySpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("TotalTargetCapacity", false, self.total_target_capacity.as_ref()),
            Member::new("OnDemandTargetCapacity", false, self.on_demand_target_capacity.as_ref()),
            Member::new("SpotTargetCapacity", false, self.spot_target_capacity.as_ref()),
            Member::new(
                "DefaultTargetCapacityType",
                false,
                self.default_target_capacity_type.as_ref(),
            ),
        ]
    }
}

impl fmt::Display for TargetCapacitySpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 TargetGroup.
///
/// Describes a load balancer target group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetGroup {
    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl TargetGroup {
    /// Returns the `Arn` member.
    #[must_use]
    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    /// Sets the `Arn` member, replacing any previous value.
    pub fn set_arn(&mut self, arn: Option<String>) {
        self.arn = arn;
    }

    /// Sets the `Arn` member and returns the updated value.
    #[must_use]
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }
}

impl Shape for TargetGroup {
    const SHAPE_NAME: &'static str = "TargetGroup";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Arn", false, self.arn.as_ref()),
        ]
    }
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 TargetGroupsConfig.
///
/// Describes the target groups to attach to a Spot Fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetGroupsConfig {
    #[serde(rename = "TargetGroups", skip_serializing_if = "Option::is_none")]
    pub target_groups: Option<Vec<TargetGroup>>,
}

impl TargetGroupsConfig {
    /// Returns the `TargetGroups` member.
    #[must_use]
    pub fn target_groups(&self) -> Option<&[TargetGroup]> {
        self.target_groups.as_deref()
    }

    /// Sets the `TargetGroups` member, replacing any previous value.
    pub fn set_target_groups(&mut self, target_groups: Option<Vec<TargetGroup>>) {
        self.target_groups = target_groups;
    }

    /// Appends to the `TargetGroups` member and returns the updated value.
    #[must_use]
    pub fn with_target_groups(
        mut self,
        target_groups: impl IntoIterator<Item = impl Into<TargetGroup>>,
    ) -> Self {
        self.target_groups
            .get_or_insert_with(Vec::new)
            .extend(target_groups.into_iter().map(Into::into));
        self
    }
}

impl Shape for TargetGroupsConfig {
    const SHAPE_NAME: &'static str = "TargetGroupsConfig";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("TargetGroups", false, self.target_groups.as_ref()),
        ]
    }
}

impl fmt::Display for TargetGroupsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 TunnelOption.
///
/// The VPN tunnel options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TunnelOption {
    #[serde(rename = "OutsideIpAddress", skip_serializing_if = "Option::is_none")]
    pub outside_ip_address: Option<String>,
    #[serde(rename = "TunnelInsideCidr", skip_serializing_if = "Option::is_none")]
    pub tunnel_inside_cidr: Option<String>,
    #[serde(rename = "PreSharedKey", skip_serializing_if = "Option::is_none")]
    pub pre_shared_key: Option<String>,
    #[serde(rename = "Phase1LifetimeSeconds", skip_serializing_if = "Option::is_none")]
    pub phase1_lifetime_seconds: Option<i32>,
    #[serde(rename = "Phase2LifetimeSeconds", skip_serializing_if = "Option::is_none")]
    pub phase2_lifetime_seconds: Option<i32>,
    #[serde(rename = "RekeyMarginTimeSeconds", skip_serializing_if = "Option::is_none")]
    pub rekey_margin_time_seconds: Option<i32>,
    #[serde(rename = "RekeyFuzzPercentage", skip_serializing_if = "Option::is_none")]
    pub rekey_fuzz_percentage: Option<i32>,
    #[serde(rename = "ReplayWindowSize", skip_serializing_if = "Option::is_none")]
    pub replay_window_size: Option<i32>,
    #[serde(rename = "DpdTimeoutSeconds", skip_serializing_if = "Option::is_none")]
    pub dpd_timeout_seconds: Option<i32>,
    #[serde(rename = "IkeVersions", skip_serializing_if = "Option::is_none")]
    pub ike_versions: Option<Vec<IKEVersionsListValue>>,
}

impl TunnelOption {
    /// Returns the `OutsideIpAddress` member.
    #[must_use]
    pub fn outside_ip_address(&self) -> Option<&str> {
        self.outside_ip_address.as_deref()
    }

    /// Sets the `OutsideIpAddress` member, replacing any previous value.
    pub fn set_outside_ip_address(&mut self, outside_ip_address: Option<String>) {
        self.outside_ip_address = outside_ip_address;
    }

    /// Sets the `OutsideIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_outside_ip_address(mut self, outside_ip_address: impl Into<String>) -> Self {
        self.outside_ip_address = Some(outside_ip_address.into());
        self
    }

    /// Returns the `TunnelInsideCidr` member.
    #[must_use]
    pub fn tunnel_inside_cidr(&self) -> Option<&str> {
        self.tunnel_inside_cidr.as_deref()
    }

    /// Sets the `TunnelInsideCidr` member, replacing any previous value.
    pub fn set_tunnel_inside_cidr(&mut self, tunnel_inside_cidr: Option<String>) {
        self.tunnel_inside_cidr = tunnel_inside_cidr;
    }

    /// Sets the `TunnelInsideCidr` member and returns the updated value.
    #[must_use]
    pub fn with_tunnel_inside_cidr(mut self, tunnel_inside_cidr: impl Into<String>) -> Self {
        self.tunnel_inside_cidr = Some(tunnel_inside_cidr.into());
        self
    }

    /// Returns the `PreSharedKey` member.
    #[must_use]
    pub fn pre_shared_key(&self) -> Option<&str> {
        self.pre_shared_key.as_deref()
    }

    /// Sets the `PreSharedKey` member, replacing any previous value.
    pub fn set_pre_shared_key(&mut self, pre_shared_key: Option<String>) {
        self.pre_shared_key = pre_shared_key;
    }

    /// Sets the `PreSharedKey` member and returns the updated value.
    #[must_use]
    pub fn with_pre_shared_key(mut self, pre_shared_key: impl Into<String>) -> Self {
        self.pre_shared_key = Some(pre_shared_key.into());
        self
    }

    /// Returns the `Phase1LifetimeSeconds` member.
    #[must_use]
    pub fn phase1_lifetime_seconds(&self) -> Option<i32> {
        self.phase1_lifetime_seconds
    }

    /// Sets the `Phase1LifetimeSeconds` member, replacing any previous value.
    pub fn set_phase1_lifetime_seconds(&mut self, phase1_lifetime_seconds: Option<i32>) {
        self.phase1_lifetime_seconds = phase1_lifetime_seconds;
    }

    /// Sets the `Phase1LifetimeSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_phase1_lifetime_seconds(mut self, phase1_lifetime_seconds: impl Into<i32>) -> Self {
        self.phase1_lifetime_seconds = Some(phase1_lifetime_seconds.into());
        self
    }

    /// Returns the `Phase2LifetimeSeconds` member.
    #[must_use]
    pub fn phase2_lifetime_seconds(&self) -> Option<i32> {
        self.phase2_lifetime_seconds
    }

    /// Sets the `Phase2LifetimeSeconds` member, replacing any previous value.
    pub fn set_phase2_lifetime_seconds(&mut self, phase2_lifetime_seconds: Option<i32>) {
        self.phase2_lifetime_seconds = phase2_lifetime_seconds;
    }

    /// Sets the `Phase2LifetimeSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_phase2_lifetime_seconds(mut self, phase2_lifetime_seconds: impl Into<i32>) -> Self {
        self.phase2_lifetime_seconds = Some(phase2_lifetime_seconds.into());
        self
    }

    /// Returns the `RekeyMarginTimeSeconds` member.
    #[must_use]
    pub fn rekey_margin_time_seconds(&self) -> Option<i32> {
        self.rekey_margin_time_seconds
    }

    /// Sets the `RekeyMarginTimeSeconds` member, replacing any previous value.
    pub fn set_rekey_margin_time_seconds(&mut self, rekey_margin_time_seconds: Option<i32>) {
        self.rekey_margin_time_seconds = rekey_margin_time_seconds;
    }

    /// Sets the `RekeyMarginTimeSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_rekey_margin_time_seconds(
        mut self,
        rekey_margin_time_seconds: impl Into<i32>,
    ) -> Self {
        self.rekey_margin_time_seconds = Some(rekey_margin_time_seconds.into());
        self
    }

    /// Returns the `RekeyFuzzPercentage` member.
    #[must_use]
    pub fn rekey_fuzz_percentage(&self) -> Option<i32> {
        self.rekey_fuzz_percentage
    }

    /// Sets the `RekeyFuzzPercentage` member, replacing any previous value.
    pub fn set_rekey_fuzz_percentage(&mut self, rekey_fuzz_percentage: Option<i32>) {
        self.rekey_fuzz_percentage = rekey_fuzz_percentage;
    }

    /// Sets the `RekeyFuzzPercentage` member and returns the updated value.
    #[must_use]
    pub fn with_rekey_fuzz_percentage(mut self, rekey_fuzz_percentage: impl Into<i32>) -> Self {
        self.rekey_fuzz_percentage = Some(rekey_fuzz_percentage.into());
        self
    }

    /// Returns the `ReplayWindowSize` member.
    #[must_use]
    pub fn replay_window_size(&self) -> Option<i32> {
        self.replay_window_size
    }

    /// Sets the `ReplayWindowSize` member, replacing any previous value.
    pub fn set_replay_window_size(&mut self, replay_window_size: Option<i32>) {
        self.replay_window_size = replay_window_size;
    }

    /// Sets the `ReplayWindowSize` member and returns the updated value.
    #[must_use]
    pub fn with_replay_window_size(mut self, replay_window_size: impl Into<i32>) -> Self {
        self.replay_window_size = Some(replay_window_size.into());
        self
    }

    /// Returns the `DpdTimeoutSeconds` member.
    #[must_use]
    pub fn dpd_timeout_seconds(&self) -> Option<i32> {
        self.dpd_timeout_seconds
    }

    /// Sets the `DpdTimeoutSeconds` member, replacing any previous value.
    pub fn set_dpd_timeout_seconds(&mut self, dpd_timeout_seconds: Option<i32>) {
        self.dpd_timeout_seconds = dpd_timeout_seconds;
    }

    /// Sets the `DpdTimeoutSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_dpd_timeout_seconds(mut self, dpd_timeout_seconds: impl Into<i32>) -> Self {
        self.dpd_timeout_seconds = Some(dpd_timeout_seconds.into());
        self
    }

    /// Returns the `IkeVersions` member.
    #[must_use]
    pub fn ike_versions(&self) -> Option<&[IKEVersionsListValue]> {
        self.ike_versions.as_deref()
    }

    /// Sets the `IkeVersions` member, replacing any previous value.
    pub fn set_ike_versions(&mut self, ike_versions: Option<Vec<IKEVersionsListValue>>) {
        self.ike_versions = ike_versions;
    }

    /// Appends to the `IkeVersions` member and returns the updated value.
    #[must_use]
    pub fn with_ike_versions(
        mut self,
        ike_versions: impl IntoIterator<Item = impl Into<IKEVersionsListValue>>,
    ) -> Self {
        self.ike_versions
            .get_or_insert_with(Vec::new)
            .extend(ike_versions.into_iter().map(Into::into));
        self
    }
}

impl Shape for TunnelOption {
    const SHAPE_NAME: &'static str = "TunnelOption";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("OutsideIpAddress", false, self.outside_ip_address.as_ref()),
            Member::new("TunnelInsideCidr", false, self.tunnel_inside_cidr.as_ref()),
            Member::new("PreSharedKey", false, self.pre_shared_key.as_ref()),
            Member::new("Phase1LifetimeSeconds", false, self.phase1_lifetime_seconds.as_ref()),
            Member::new("Phase2LifetimeSeconds", false, self.phase2_lifetime_seconds.as_ref()),
            Member::new("RekeyMarginTimeSeconds", false, self.rekey_margin_time_seconds.as_ref()),
            Member::new("RekeyFuzzPercentage", false, self.rekey_fuzz_percentage.as_ref()),
            Member::new("ReplayWindowSize", false, self.replay_window_size.as_ref()),
            Member::new("DpdTimeoutSeconds", false, self.dpd_timeout_seconds.as_ref()),
            Member::new("IkeVersions", false, self.ike_versions.as_ref()),
        ]
    }
}

impl fmt::Display for TunnelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 UnsuccessfulItem.
///
/// Information about items that were not successfully processed in a batch call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsuccessfulItem {
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<UnsuccessfulItemError>,
    #[serde(rename = "ResourceId", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl UnsuccessfulItem {
    /// Returns the `Error` member.
    #[must_use]
    pub fn error(&self) -> Option<&UnsuccessfulItemError> {
        self.error.as_ref()
    }

    /// Sets the `Error` member, replacing any previous value.
    pub fn set_error(&mut self, error: Option<UnsuccessfulItemError>) {
        self.error = error;
    }

    /// Sets the `Error` member and returns the updated value.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<UnsuccessfulItemError>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Returns the `ResourceId` member.
    #[must_use]
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// Sets the `ResourceId` member, replacing any previous value.
    pub fn set_resource_id(&mut self, resource_id: Option<String>) {
        self.resource_id = resource_id;
    }

    /// Sets the `ResourceId` member and returns the updated value.
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }
}

impl Shape for UnsuccessfulItem {
    const SHAPE_NAME: &'static str = "UnsuccessfulItem";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Error", false, self.error.as_ref()),
            Member::new("ResourceId", false, self.resource_id.as_ref()),
        ]
    }
}

impl fmt::Display for UnsuccessfulItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 UnsuccessfulItemError.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsuccessfulItemError {
    #[serde(rename = "Code", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "Message", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UnsuccessfulItemError {
    /// Returns the `Code` member.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Sets the `Code` member, replacing any previous value.
    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code;
    }

    /// Sets the `Code` member and returns the updated value.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the `Message` member.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Sets the `Message` member, replacing any previous value.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    /// Sets the `Message` member and returns the updated value.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Shape for UnsuccessfulItemError {
    const SHAPE_NAME: &'static str = "UnsuccessfulItemError";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Code", false, self.code.as_ref()),
            Member::new("Message", false, self.message.as_ref()),
        ]
    }
}

impl fmt::Display for UnsuccessfulItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 UserBucket.
///
/// Describes the Amazon S3 bucket for the disk image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserBucket {
    #[serde(rename = "S3Bucket", skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
    #[serde(rename = "S3Key", skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
}

impl UserBucket {
    /// Returns the `S3Bucket` member.
    #[must_use]
    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    /// Sets the `S3Bucket` member, replacing any previous value.
    pub fn set_s3_bucket(&mut self, s3_bucket: Option<String>) {
        self.s3_bucket = s3_bucket;
    }

    /// Sets the `S3Bucket` member and returns the updated value.
    #[must_use]
    pub fn with_s3_bucket(mut self, s3_bucket: impl Into<String>) -> Self {
        self.s3_bucket = Some(s3_bucket.into());
        self
    }

    /// Returns the `S3Key` member.
    #[must_use]
    pub fn s3_key(&self) -> Option<&str> {
        self.s3_key.as_deref()
    }

    /// Sets the `S3Key` member, replacing any previous value.
    pub fn set_s3_key(&mut self, s3_key: Option<String>) {
        self.s3_key = s3_key;
    }

    /// Sets the `S3Key` member and returns the updated value.
    #[must_use]
    pub fn with_s3_key(mut self, s3_key: impl Into<String>) -> Self {
        self.s3_key = Some(s3_key.into());
        self
    }
}

impl Shape for UserBucket {
    const SHAPE_NAME: &'static str = "UserBucket";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("S3Bucket", false, self.s3_bucket.as_ref()),
            Member::new("S3Key", false, self.s3_key.as_ref()),
        ]
    }
}

impl fmt::Display for UserBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 UserBucketDetails.
///
/// Describes the Amazon S3 bucket for the disk image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserBucketDetails {
    #[serde(rename = "S3Bucket", skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
    #[serde(rename = "S3Key", skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
}

impl UserBucketDetails {
    /// Returns the `S3Bucket` member.
    #[must_use]
    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    /// Sets the `S3Bucket` member, replacing any previous value.
    pub fn set_s3_bucket(&mut self, s3_bucket: Option<String>) {
        self.s3_bucket = s3_bucket;
    }

    /// Sets the `S3Bucket` member and returns the updated value.
    #[must_use]
    pub fn with_s3_bucket(mut self, s3_bucket: impl Into<String>) -> Self {
        self.s3_bucket = Some(s3_bucket.into());
        self
    }

    /// Returns the `S3Key` member.
    #[must_use]
    pub fn s3_key(&self) -> Option<&str> {
        self.s3_key.as_deref()
    }

    /// Sets the `S3Key` member, replacing any previous value.
    pub fn set_s3_key(&mut self, s3_key: Option<String>) {
        self.s3_key = s3_key;
    }

    /// Sets the `S3Key` member and returns the updated value.
    #[must_use]
    pub fn with_s3_key(mut self, s3_key: impl Into<String>) -> Self {
        self.s3_key = Some(s3_key.into());
        self
    }
}

impl Shape for UserBucketDetails {
    const SHAPE_NAME: &'static str = "UserBucketDetails";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("S3Bucket", false, self.s3_bucket.as_ref()),
            Member::new("S3Key", false, self.s3_key.as_ref()),
        ]
    }
}

impl fmt::Display for UserBucketDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 UserIdGroupPair.
///
/// Describes a security group and AWS account ID pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdGroupPair {
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "PeeringStatus", skip_serializing_if = "Option::is_none")]
    pub peering_status: Option<String>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(rename = "VpcPeeringConnectionId", skip_serializing_if = "Option::is_none")]
    pub vpc_peering_connection_id: Option<String>,
}

impl UserIdGroupPair {
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

    /// Returns the `GroupId` member.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    /// Sets the `GroupId` member, replacing any previous value.
    pub fn set_group_id(&mut self, group_id: Option<String>) {
        self.group_id = group_id;
    }

    /// Sets the `GroupId` member and returns the updated value.
    #[must_use]
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Returns the `GroupName` member.
    #[must_use]
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// Sets the `GroupName` member, replacing any previous value.
    pub fn set_group_name(&mut self, group_name: Option<String>) {
        self.group_name = group_name;
    }

    /// Sets the `GroupName` member and returns the updated value.
    #[must_use]
    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Returns the `PeeringStatus` member.
    #[must_use]
    pub fn peering_status(&self) -> Option<&str> {
        self.peering_status.as_deref()
    }

    /// Sets the `PeeringStatus` member, replacing any previous value.
    pub fn set_peering_status(&mut self, peering_status: Option<String>) {
        self.peering_status = peering_status;
    }

    /// Sets the `PeeringStatus` member and returns the updated value.
    #[must_use]
    pub fn with_peering_status(mut self, peering_status: impl Into<String>) -> Self {
        self.peering_status = Some(peering_status.into());
        self
    }

    /// Returns the `UserId` member.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Sets the `UserId` member, replacing any previous value.
    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    /// Sets the `UserId` member and returns the updated value.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Returns the `VpcId` member.
    #[must_use]
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref()
    }

    /// Sets the `VpcId` member, replacing any previous value.
    pub fn set_vpc_id(&mut self, vpc_id: Option<String>) {
        self.vpc_id = vpc_id;
    }

    /// Sets the `VpcId` member and returns the updated value.
    #[must_use]
    pub fn with_vpc_id(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
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

impl Shape for UserIdGroupPair {
    const SHAPE_NAME: &'static str = "UserIdGroupPair";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Description", false, self.description.as_ref()),
            Member::new("GroupId", false, self.group_id.as_ref()),
            Member::new("GroupName", false, self.group_name.as_ref()),
            Member::new("PeeringStatus", false, self.peering_status.as_ref()),
            Member::new("UserId", false, self.user_id.as_ref()),
            Member::new("VpcId", false, self.vpc_id.as_ref()),
            Member::new("VpcPeeringConnectionId", false, self.vpc_peering_connection_id.as_ref()),
        ]
    }
}

impl fmt::Display for UserIdGroupPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VCpuInfo.
///
/// Describes the vCPU configurations for the instance type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VCpuInfo {
    #[serde(rename = "DefaultVCpus", skip_serializing_if = "Option::is_none")]
    pub default_v_cpus: Option<i32>,
    #[serde(rename = "DefaultCores", skip_serializing_if = "Option::is_none")]
    pub default_cores: Option<i32>,
    #[serde(rename = "DefaultThreadsPerCore", skip_serializing_if = "Option::is_none")]
    pub default_threads_per_core: Option<i32>,
    #[serde(rename = "ValidCores", skip_serializing_if = "Option::is_none")]
    pub valid_cores: Option<Vec<i32>>,
    #[serde(rename = "ValidThreadsPerCore", skip_serializing_if = "Option::is_none")]
    pub valid_threads_per_core: Option<Vec<i32>>,
}

impl VCpuInfo {
    /// Returns the `DefaultVCpus` member.
    #[must_use]
    pub fn default_v_cpus(&self) -> Option<i32> {
        self.default_v_cpus
    }

    /// Sets the `DefaultVCpus` member, replacing any previous value.
    pub fn set_default_v_cpus(&mut self, default_v_cpus: Option<i32>) {
        self.default_v_cpus = default_v_cpus;
    }

    /// Sets the `DefaultVCpus` member and returns the updated value.
    #[must_use]
    pub fn with_default_v_cpus(mut self, default_v_cpus: impl Into<i32>) -> Self {
        self.default_v_cpus = Some(default_v_cpus.into());
        self
    }

    /// Returns the `DefaultCores` member.
    #[must_use]
    pub fn default_cores(&self) -> Option<i32> {
        self.default_cores
    }

    /// Sets the `DefaultCores` member, replacing any previous value.
    pub fn set_default_cores(&mut self, default_cores: Option<i32>) {
        self.default_cores = default_cores;
    }

    /// Sets the `DefaultCores` member and returns the updated value.
    #[must_use]
    pub fn with_default_cores(mut self, default_cores: impl Into<i32>) -> Self {
        self.default_cores = Some(default_cores.into());
        self
    }

    /// Returns the `DefaultThreadsPerCore` member.
    #[must_use]
    pub fn default_threads_per_core(&self) -> Option<i32> {
        self.default_threads_per_core
    }

    /// Sets the `DefaultThreadsPerCore` member, replacing any previous value.
    pub fn set_default_threads_per_core(&mut self, default_threads_per_core: Option<i32>) {
        self.default_threads_per_core = default_threads_per_core;
    }

    /// Sets the `DefaultThreadsPerCore` member and returns the updated value.
    #[must_use]
    pub fn with_default_threads_per_core(
        mut self,
        default_threads_per_core: impl Into<i32>,
    ) -> Self {
        self.default_threads_per_core = Some(default_threads_per_core.into());
        self
    }

    /// Returns the `ValidCores` member.
    #[must_use]
    pub fn valid_cores(&self) -> Option<&[i32]> {
        self.valid_cores.as_deref()
    }

    /// Sets the `ValidCores` member, replacing any previous value.
    pub fn set_valid_cores(&mut self, valid_cores: Option<Vec<i32>>) {
        self.valid_cores = valid_cores;
    }

    /// Appends to the `ValidCores` member and returns the updated value.
    #[must_use]
    pub fn with_valid_cores(
        mut self,
        valid_cores: impl IntoIterator<Item = impl Into<i32>>,
    ) -> Self {
        self.valid_cores
            .get_or_insert_with(Vec::new)
            .extend(valid_cores.into_iter().map(Into::into));
        self
    }

    /// Returns the `ValidThreadsPerCore` member.
    #[must_use]
    pub fn valid_threads_per_core(&self) -> Option<&[i32]> {
        self.valid_threads_per_core.as_deref()
    }

    /// Sets the `ValidThreadsPerCore` member, replacing any previous value.
    pub fn set_valid_threads_per_core(&mut self, valid_threads_per_core: Option<Vec<i32>>) {
        self.valid_threads_per_core = valid_threads_per_core;
    }

    /// Appends to the `ValidThreadsPerCore` member and returns the updated value.
    #[must_use]
    pub fn with_valid_threads_per_core(
        mut self,
        valid_threads_per_core: impl IntoIterator<Item = impl Into<i32>>,
    ) -> Self {
        self.valid_threads_per_core
            .get_or_insert_with(Vec::new)
            .extend(valid_threads_per_core.into_iter().map(Into::into));
        self
    }
}

impl Shape for VCpuInfo {
    const SHAPE_NAME: &'static str = "VCpuInfo";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DefaultVCpus", false, self.default_v_cpus.as_ref()),
            Member::new("DefaultCores", false, self.default_cores.as_ref()),
            Member::new("DefaultThreadsPerCore", false, self.default_threads_per_core.as_ref()),
            Member::new("ValidCores", false, self.valid_cores.as_ref()),
            Member::new("ValidThreadsPerCore", false, self.valid_threads_per_core.as_ref()),
        ]
    }
}

impl fmt::Display for VCpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VgwTelemetry.
///
/// Describes telemetry for a VPN tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VgwTelemetry {
    #[serde(rename = "AcceptedRouteCount", skip_serializing_if = "Option::is_none")]
    pub accepted_route_count: Option<i32>,
    #[serde(rename = "LastStatusChange", skip_serializing_if = "Option::is_none")]
    pub last_status_change: Option<DateTime<Utc>>,
    #[serde(rename = "OutsideIpAddress", skip_serializing_if = "Option::is_none")]
    pub outside_ip_address: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<TelemetryStatus>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl VgwTelemetry {
    /// Returns the `AcceptedRouteCount` member.
    #[must_use]
    pub fn accepted_route_count(&self) -> Option<i32> {
        self.accepted_route_count
    }

    /// Sets the `AcceptedRouteCount` member, replacing any previous value.
    pub fn set_accepted_route_count(&mut self, accepted_route_count: Option<i32>) {
        self.accepted_route_count = accepted_route_count;
    }

    /// Sets the `AcceptedRouteCount` member and returns the updated value.
    #[must_use]
    pub fn with_accepted_route_count(mut self, accepted_route_count: impl Into<i32>) -> Self {
        self.accepted_route_count = Some(accepted_route_count.into());
        self
    }

    /// Returns the `LastStatusChange` member.
    #[must_use]
    pub fn last_status_change(&self) -> Option<&DateTime<Utc>> {
        self.last_status_change.as_ref()
    }

    /// Sets the `LastStatusChange` member, replacing any previous value.
    pub fn set_last_status_change(&mut self, last_status_change: Option<DateTime<Utc>>) {
        self.last_status_change = last_status_change;
    }

    /// Sets the `LastStatusChange` member and returns the updated value.
    #[must_use]
    pub fn with_last_status_change(mut self, last_status_change: impl Into<DateTime<Utc>>) -> Self {
        self.last_status_change = Some(last_status_change.into());
        self
    }

    /// Returns the `OutsideIpAddress` member.
    #[must_use]
    pub fn outside_ip_address(&self) -> Option<&str> {
        self.outside_ip_address.as_deref()
    }

    /// Sets the `OutsideIpAddress` member, replacing any previous value.
    pub fn set_outside_ip_address(&mut self, outside_ip_address: Option<String>) {
        self.outside_ip_address = outside_ip_address;
    }

    /// Sets the `OutsideIpAddress` member and returns the updated value.
    #[must_use]
    pub fn with_outside_ip_address(mut self, outside_ip_address: impl Into<String>) -> Self {
        self.outside_ip_address = Some(outside_ip_address.into());
        self
    }

    /// Returns the `Status` member.
    #[must_use]
    pub fn status(&self) -> Option<&TelemetryStatus> {
        self.status.as_ref()
    }

    /// Sets the `Status` member, replacing any previous value.
    pub fn set_status(&mut self, status: Option<TelemetryStatus>) {
        self.status = status;
    }

    /// Sets the `Status` member and returns the updated value.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TelemetryStatus>) -> Self {
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
}

impl Shape for VgwTelemetry {
    const SHAPE_NAME: &'static str = "VgwTelemetry";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AcceptedRouteCount", false, self.accepted_route_count.as_ref()),
            Member::new("LastStatusChange", false, self.last_status_change.as_ref()),
            Member::new("OutsideIpAddress", false, self.outside_ip_address.as_ref()),
            Member::new("Status", false, self.status.as_ref()),
            Member::new("StatusMessage", false, self.status_message.as_ref()),
        ]
    }
}

impl fmt::Display for VgwTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 Volume.
///
/// Describes a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Volume {
    #[serde(rename = "Attachments", skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<VolumeAttachment>>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// The time stamp when volume creation was initiated.
    #[serde(rename = "CreateTime", skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(rename = "Encrypted", skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(rename = "KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "OutpostArn", skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<String>,
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(rename = "SnapshotId", skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// The volume state.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<VolumeState>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
    #[serde(rename = "Iops", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "VolumeType", skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(rename = "FastRestored", skip_serializing_if = "Option::is_none")]
    pub fast_restored: Option<bool>,
    #[serde(rename = "MultiAttachEnabled", skip_serializing_if = "Option::is_none")]
    pub multi_attach_enabled: Option<bool>,
}

impl Volume {
    /// Returns the `Attachments` member.
    #[must_use]
    pub fn attachments(&self) -> Option<&[VolumeAttachment]> {
        self.attachments.as_deref()
    }

    /// Sets the `Attachments` member, replacing any previous value.
    pub fn set_attachments(&mut self, attachments: Option<Vec<VolumeAttachment>>) {
        self.attachments = attachments;
    }

    /// Appends to the `Attachments` member and returns the updated value.
    #[must_use]
    pub fn with_attachments(
        mut self,
        attachments: impl IntoIterator<Item = impl Into<VolumeAttachment>>,
    ) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .extend(attachments.into_iter().map(Into::into));
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

    /// Returns the `CreateTime` member.
    #[must_use]
    pub fn create_time(&self) -> Option<&DateTime<Utc>> {
        self.create_time.as_ref()
    }

    /// Sets the `CreateTime` member, replacing any previous value.
    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time;
    }

    /// Sets the `CreateTime` member and returns the updated value.
    #[must_use]
    pub fn with_create_time(mut self, create_time: impl Into<DateTime<Utc>>) -> Self {
        self.create_time = Some(create_time.into());
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

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&VolumeState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<VolumeState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<VolumeState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `VolumeId` member.
    #[must_use]
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }

    /// Sets the `VolumeId` member, replacing any previous value.
    pub fn set_volume_id(&mut self, volume_id: Option<String>) {
        self.volume_id = volume_id;
    }

    /// Sets the `VolumeId` member and returns the updated value.
    #[must_use]
    pub fn with_volume_id(mut self, volume_id: impl Into<String>) -> Self {
        self.volume_id = Some(volume_id.into());
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

    /// Returns the `FastRestored` member.
    #[must_use]
    pub fn fast_restored(&self) -> Option<bool> {
        self.fast_restored
    }

    /// Sets the `FastRestored` member, replacing any previous value.
    pub fn set_fast_restored(&mut self, fast_restored: Option<bool>) {
        self.fast_restored = fast_restored;
    }

    /// Sets the `FastRestored` member and returns the updated value.
    #[must_use]
    pub fn with_fast_restored(mut self, fast_restored: impl Into<bool>) -> Self {
        self.fast_restored = Some(fast_restored.into());
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

impl Shape for Volume {
    const SHAPE_NAME: &'static str = "Volume";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("Attachments", false, self.attachments.as_ref()),
            Member::new("AvailabilityZone", false, self.availability_zone.as_ref()),
            Member::new("CreateTime", false, self.create_time.as_ref()),
            Member::new("Encrypted", false, self.encrypted.as_ref()),
            Member::new("KmsKeyId", false, self.kms_key_id.as_ref()),
            Member::new("OutpostArn", false, self.outpost_arn.as_ref()),
            Member::new("Size", false, self.size.as_ref()),
            Member::new("SnapshotId", false, self.snapshot_id.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("VolumeId", false, self.volume_id.as_ref()),
            Member::new("Iops", false, self.iops.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("VolumeType", false, self.volume_type.as_ref()),
            Member::new("FastRestored", false, self.fast_restored.as_ref()),
            Member::new("MultiAttachEnabled", false, self.multi_attach_enabled.as_ref()),
        ]
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VolumeAttachment.
///
/// Describes volume attachment details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeAttachment {
    #[serde(rename = "AttachTime", skip_serializing_if = "Option::is_none")]
    pub attach_time: Option<DateTime<Utc>>,
    #[serde(rename = "Device", skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<VolumeAttachmentState>,
    #[serde(rename = "VolumeId", skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<String>,
    #[serde(rename = "DeleteOnTermination", skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
}

impl VolumeAttachment {
    /// Returns the `AttachTime` member.
    #[must_use]
    pub fn attach_time(&self) -> Option<&DateTime<Utc>> {
        self.attach_time.as_ref()
    }

    /// Sets the `AttachTime` member, replacing any previous value.
    pub fn set_attach_time(&mut self, attach_time: Option<DateTime<Utc>>) {
        self.attach_time = attach_time;
    }

    /// Sets the `AttachTime` member and returns the updated value.
    #[must_use]
    pub fn with_attach_time(mut self, attach_time: impl Into<DateTime<Utc>>) -> Self {
        self.attach_time = Some(attach_time.into());
        self
    }

    /// Returns the `Device` member.
    #[must_use]
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// Sets the `Device` member, replacing any previous value.
    pub fn set_device(&mut self, device: Option<String>) {
        self.device = device;
    }

    /// Sets the `Device` member and returns the updated value.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
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

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&VolumeAttachmentState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<VolumeAttachmentState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<VolumeAttachmentState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `VolumeId` member.
    #[must_use]
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }

    /// Sets the `VolumeId` member, replacing any previous value.
    pub fn set_volume_id(&mut self, volume_id: Option<String>) {
        self.volume_id = volume_id;
    }

    /// Sets the `VolumeId` member and returns the updated value.
    #[must_use]
    pub fn with_volume_id(mut self, volume_id: impl Into<String>) -> Self {
        self.volume_id = Some(volume_id.into());
        self
    }

    /// Returns the `DeleteOnTermination` member.
    #[must_use]
    pub fn delete_on_termination(&self) -> Option<bool> {
        self.delete_on_termination
    }

    /// Sets the `DeleteOnTermination` member, replacing any previous value.
    pub fn set_delete_on_termination(&mut self, delete_on_termination: Option<bool>) {
        self.delete_on_termination = delete_on_termination;
    }

    /// Sets the `DeleteOnTermination` member and returns the updated value.
    #[must_use]
    pub fn with_delete_on_termination(mut self, delete_on_termination: impl Into<bool>) -> Self {
        self.delete_on_termination = Some(delete_on_termination.into());
        self
    }
}

impl Shape for VolumeAttachment {
    const SHAPE_NAME: &'static str = "VolumeAttachment";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("AttachTime", false, self.attach_time.as_ref()),
            Member::new("Device", false, self.device.as_ref()),
            Member::new("InstanceId", false, self.instance_id.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("VolumeId", false, self.volume_id.as_ref()),
            Member::new("DeleteOnTermination", false, self.delete_on_termination.as_ref()),
        ]
    }
}

impl fmt::Display for VolumeAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VpnConnection.
///
/// Describes a VPN connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VpnConnection {
    #[serde(rename = "CustomerGatewayConfiguration", skip_serializing_if = "Option::is_none")]
    pub customer_gateway_configuration: Option<String>,
    #[serde(rename = "CustomerGatewayId", skip_serializing_if = "Option::is_none")]
    pub customer_gateway_id: Option<String>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The current state of the VPN connection.
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<VpnState>,
    /// The type of VPN connection.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<GatewayType>,
    #[serde(rename = "VpnConnectionId", skip_serializing_if = "Option::is_none")]
    pub vpn_connection_id: Option<String>,
    #[serde(rename = "VpnGatewayId", skip_serializing_if = "Option::is_none")]
    pub vpn_gateway_id: Option<String>,
    #[serde(rename = "TransitGatewayId", skip_serializing_if = "Option::is_none")]
    pub transit_gateway_id: Option<String>,
    #[serde(rename = "Options", skip_serializing_if = "Option::is_none")]
    pub options: Option<VpnConnectionOptions>,
    #[serde(rename = "Routes", skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<VpnStaticRoute>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "VgwTelemetry", skip_serializing_if = "Option::is_none")]
    pub vgw_telemetry: Option<Vec<VgwTelemetry>>,
}

impl VpnConnection {
    /// Returns the `CustomerGatewayConfiguration` member.
    #[must_use]
    pub fn customer_gateway_configuration(&self) -> Option<&str> {
        self.customer_gateway_configuration.as_deref()
    }

    /// Sets the `CustomerGatewayConfiguration` member, replacing any previous value.
    pub fn set_customer_gateway_configuration(
        &mut self,
        customer_gateway_configuration: Option<String>,
    ) {
        self.customer_gateway_configuration = customer_gateway_configuration;
    }

    /// Sets the `CustomerGatewayConfiguration` member and returns the updated value.
    #[must_use]
    pub fn with_customer_gateway_configuration(
        mut self,
        customer_gateway_configuration: impl Into<String>,
    ) -> Self {
        self.customer_gateway_configuration = Some(customer_gateway_configuration.into());
        self
    }

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

    /// Returns the `Category` member.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Sets the `Category` member, replacing any previous value.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Sets the `Category` member and returns the updated value.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&VpnState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<VpnState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<VpnState>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Returns the `Type` member.
    #[must_use]
    pub fn r#type(&self) -> Option<&GatewayType> {
        self.r#type.as_ref()
    }

    /// Sets the `Type` member, replacing any previous value.
    pub fn set_type(&mut self, r#type: Option<GatewayType>) {
        self.r#type = r#type;
    }

    /// Sets the `Type` member and returns the updated value.
    #[must_use]
    pub fn with_type(mut self, r#type: impl Into<GatewayType>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    /// Returns the `VpnConnectionId` member.
    #[must_use]
    pub fn vpn_connection_id(&self) -> Option<&str> {
        self.vpn_connection_id.as_deref()
    }

    /// Sets the `VpnConnectionId` member, replacing any previous value.
    pub fn set_vpn_connection_id(&mut self, vpn_connection_id: Option<String>) {
        self.vpn_connection_id = vpn_connection_id;
    }

    /// Sets the `VpnConnectionId` member and returns the updated value.
    #[must_use]
    pub fn with_vpn_connection_id(mut self, vpn_connection_id: impl Into<String>) -> Self {
        self.vpn_connection_id = Some(vpn_connection_id.into());
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

    /// Returns the `Options` member.
    #[must_use]
    pub fn options(&self) -> Option<&VpnConnectionOptions> {
        self.options.as_ref()
    }

    /// Sets the `Options` member, replacing any previous value.
    pub fn set_options(&mut self, options: Option<VpnConnectionOptions>) {
        self.options = options;
    }

    /// Sets the `Options` member and returns the updated value.
    #[must_use]
    pub fn with_options(mut self, options: impl Into<VpnConnectionOptions>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Returns the `Routes` member.
    #[must_use]
    pub fn routes(&self) -> Option<&[VpnStaticRoute]> {
        self.routes.as_deref()
    }

    /// Sets the `Routes` member, replacing any previous value.
    pub fn set_routes(&mut self, routes: Option<Vec<VpnStaticRoute>>) {
        self.routes = routes;
    }

    /// Appends to the `Routes` member and returns the updated value.
    #[must_use]
    pub fn with_routes(
        mut self,
        routes: impl IntoIterator<Item = impl Into<VpnStaticRoute>>,
    ) -> Self {
        self.routes
            .get_or_insert_with(Vec::new)
            .extend(routes.into_iter().map(Into::into));
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

    /// Returns the `VgwTelemetry` member.
    #[must_use]
    pub fn vgw_telemetry(&self) -> Option<&[VgwTelemetry]> {
        self.vgw_telemetry.as_deref()
    }

    /// Sets the `VgwTelemetry` member, replacing any previous value.
    pub fn set_vgw_telemetry(&mut self, vgw_telemetry: Option<Vec<VgwTelemetry>>) {
        self.vgw_telemetry = vgw_telemetry;
    }

    /// Appends to the `VgwTelemetry` member and returns the updated value.
    #[must_use]
    pub fn with_vgw_telemetry(
        mut self,
        vgw_telemetry: impl IntoIterator<Item = impl Into<VgwTelemetry>>,
    ) -> Self {
        self.vgw_telemetry
            .get_or_insert_with(Vec::new)
            .extend(vgw_telemetry.into_iter().map(Into::into));
        self
    }
}

impl Shape for VpnConnection {
    const SHAPE_NAME: &'static str = "VpnConnection";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new(
                "CustomerGatewayConfiguration",
                false,
                self.customer_gateway_configuration.as_ref(),
            ),
            Member::new("CustomerGatewayId", false, self.customer_gateway_id.as_ref()),
            Member::new("Category", false, self.category.as_ref()),
            Member::new("State", false, self.state.as_ref()),
            Member::new("Type", false, self.r#type.as_ref()),
            Member::new("VpnConnectionId", false, self.vpn_connection_id.as_ref()),
            Member::new("VpnGatewayId", false, self.vpn_gateway_id.as_ref()),
            Member::new("TransitGatewayId", false, self.transit_gateway_id.as_ref()),
            Member::new("Options", false, self.options.as_ref()),
            Member::new("Routes", false, self.routes.as_ref()),
            Member::new("Tags", false, self.tags.as_ref()),
            Member::new("VgwTelemetry", false, self.vgw_telemetry.as_ref()),
        ]
    }
}

impl fmt::Display for VpnConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VpnConnectionOptions.
///
/// Describes VPN connection options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VpnConnectionOptions {
    #[serde(rename = "EnableAcceleration", skip_serializing_if = "Option::is_none")]
    pub enable_acceleration: Option<bool>,
    #[serde(rename = "StaticRoutesOnly", skip_serializing_if = "Option::is_none")]
    pub static_routes_only: Option<bool>,
    #[serde(rename = "TunnelOptions", skip_serializing_if = "Option::is_none")]
    pub tunnel_options: Option<Vec<TunnelOption>>,
}

impl VpnConnectionOptions {
    /// Returns the `EnableAcceleration` member.
    #[must_use]
    pub fn enable_acceleration(&self) -> Option<bool> {
        self.enable_acceleration
    }

    /// Sets the `EnableAcceleration` member, replacing any previous value.
    pub fn set_enable_acceleration(&mut self, enable_acceleration: Option<bool>) {
        self.enable_acceleration = enable_acceleration;
    }

    /// Sets the `EnableAcceleration` member and returns the updated value.
    #[must_use]
    pub fn with_enable_acceleration(mut self, enable_acceleration: impl Into<bool>) -> Self {
        self.enable_acceleration = Some(enable_acceleration.into());
        self
    }

    /// Returns the `StaticRoutesOnly` member.
    #[must_use]
    pub fn static_routes_only(&self) -> Option<bool> {
        self.static_routes_only
    }

    /// Sets the `StaticRoutesOnly` member, replacing any previous value.
    pub fn set_static_routes_only(&mut self, static_routes_only: Option<bool>) {
        self.static_routes_only = static_routes_only;
    }

    /// Sets the `StaticRoutesOnly` member and returns the updated value.
    #[must_use]
    pub fn with_static_routes_only(mut self, static_routes_only: impl Into<bool>) -> Self {
        self.static_routes_only = Some(static_routes_only.into());
        self
    }

    /// Returns the `TunnelOptions` member.
    #[must_use]
    pub fn tunnel_options(&self) -> Option<&[TunnelOption]> {
        self.tunnel_options.as_deref()
    }

    /// Sets the `TunnelOptions` member, replacing any previous value.
    pub fn set_tunnel_options(&mut self, tunnel_options: Option<Vec<TunnelOption>>) {
        self.tunnel_options = tunnel_options;
    }

    /// Appends to the `TunnelOptions` member and returns the updated value.
    #[must_use]
    pub fn with_tunnel_options(
        mut self,
        tunnel_options: impl IntoIterator<Item = impl Into<TunnelOption>>,
    ) -> Self {
        self.tunnel_options
            .get_or_insert_with(Vec::new)
            .extend(tunnel_options.into_iter().map(Into::into));
        self
    }
}

impl Shape for VpnConnectionOptions {
    const SHAPE_NAME: &'static str = "VpnConnectionOptions";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("EnableAcceleration", false, self.enable_acceleration.as_ref()),
            Member::new("StaticRoutesOnly", false, self.static_routes_only.as_ref()),
            Member::new("TunnelOptions", false, self.tunnel_options.as_ref()),
        ]
    }
}

impl fmt::Display for VpnConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VpnConnectionOptionsSpecification.
///
/// Describes VPN connection options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VpnConnectionOptionsSpecification {
    #[serde(rename = "EnableAcceleration", skip_serializing_if = "Option::is_none")]
    pub enable_acceleration: Option<bool>,
    /// Indicate whether the VPN connection uses static routes only.
    #[serde(rename = "StaticRoutesOnly", skip_serializing_if = "Option::is_none")]
    pub static_routes_only: Option<bool>,
    /// The tunnel options for the VPN connection.
    #[serde(rename = "TunnelOptions", skip_serializing_if = "Option::is_none")]
    pub tunnel_options: Option<Vec<VpnTunnelOptionsSpecification>>,
}

impl VpnConnectionOptionsSpecification {
    /// Returns the `EnableAcceleration` member.
    #[must_use]
    pub fn enable_acceleration(&self) -> Option<bool> {
        self.enable_acceleration
    }

    /// Sets the `EnableAcceleration` member, replacing any previous value.
    pub fn set_enable_acceleration(&mut self, enable_acceleration: Option<bool>) {
        self.enable_acceleration = enable_acceleration;
    }

    /// Sets the `EnableAcceleration` member and returns the updated value.
    #[must_use]
    pub fn with_enable_acceleration(mut self, enable_acceleration: impl Into<bool>) -> Self {
        self.enable_acceleration = Some(enable_acceleration.into());
        self
    }

    /// Returns the `StaticRoutesOnly` member.
    #[must_use]
    pub fn static_routes_only(&self) -> Option<bool> {
        self.static_routes_only
    }

    /// Sets the `StaticRoutesOnly` member, replacing any previous value.
    pub fn set_static_routes_only(&mut self, static_routes_only: Option<bool>) {
        self.static_routes_only = static_routes_only;
    }

    /// Sets the `StaticRoutesOnly` member and returns the updated value.
    #[must_use]
    pub fn with_static_routes_only(mut self, static_routes_only: impl Into<bool>) -> Self {
        self.static_routes_only = Some(static_routes_only.into());
        self
    }

    /// Returns the `TunnelOptions` member.
    #[must_use]
    pub fn tunnel_options(&self) -> Option<&[VpnTunnelOptionsSpecification]> {
        self.tunnel_options.as_deref()
    }

    /// Sets the `TunnelOptions` member, replacing any previous value.
    pub fn set_tunnel_options(
        &mut self,
        tunnel_options: Option<Vec<VpnTunnelOptionsSpecification>>,
    ) {
        self.tunnel_options = tunnel_options;
    }

    /// Appends to the `TunnelOptions` member and returns the updated value.
    #[must_use]
    pub fn with_tunnel_options(
        mut self,
        tunnel_options: impl IntoIterator<Item = impl Into<VpnTunnelOptionsSpecification>>,
    ) -> Self {
        self.tunnel_options
            .get_or_insert_with(Vec::new)
            .extend(tunnel_options.into_iter().map(Into::into));
        self
    }
}

impl Shape for VpnConnectionOptionsSpecification {
    const SHAPE_NAME: &'static str = "VpnConnectionOptionsSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("EnableAcceleration", false, self.enable_acceleration.as_ref()),
            Member::new("StaticRoutesOnly", false, self.static_routes_only.as_ref()),
            Member::new("TunnelOptions", false, self.tunnel_options.as_ref()),
        ]
    }
}

impl fmt::Display for VpnConnectionOptionsSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VpnStaticRoute.
///
/// Describes a static route for a VPN connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VpnStaticRoute {
    #[serde(rename = "DestinationCidrBlock", skip_serializing_if = "Option::is_none")]
    pub destination_cidr_block: Option<String>,
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<VpnStaticRouteSource>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    pub state: Option<VpnState>,
}

impl VpnStaticRoute {
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

    /// Returns the `Source` member.
    #[must_use]
    pub fn source(&self) -> Option<&VpnStaticRouteSource> {
        self.source.as_ref()
    }

    /// Sets the `Source` member, replacing any previous value.
    pub fn set_source(&mut self, source: Option<VpnStaticRouteSource>) {
        self.source = source;
    }

    /// Sets the `Source` member and returns the updated value.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<VpnStaticRouteSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the `State` member.
    #[must_use]
    pub fn state(&self) -> Option<&VpnState> {
        self.state.as_ref()
    }

    /// Sets the `State` member, replacing any previous value.
    pub fn set_state(&mut self, state: Option<VpnState>) {
        self.state = state;
    }

    /// Sets the `State` member and returns the updated value.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<VpnState>) -> Self {
        self.state = Some(state.into());
        self
    }
}

impl Shape for VpnStaticRoute {
    const SHAPE_NAME: &'static str = "VpnStaticRoute";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DestinationCidrBlock", false, self.destination_cidr_block.as_ref()),
            Member::new("Source", false, self.source.as_ref()),
            Member::new("State", false, self.state.as_ref()),
        ]
    }
}

impl fmt::Display for VpnStaticRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

/// EC2 VpnTunnelOptionsSpecification.
///
/// The tunnel options for a single VPN tunnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VpnTunnelOptionsSpecification {
    /// The range of inside IP addresses for the tunnel.
    #[serde(rename = "TunnelInsideCidr", skip_serializing_if = "Option::is_none")]
    pub tunnel_inside_cidr: Option<String>,
    /// The pre-shared key (PSK) to establish initial authentication between the virtual private gateway and customer gateway.
    #[serde(rename = "PreSharedKey", skip_serializing_if = "Option::is_none")]
    pub pre_shared_key: Option<String>,
    #[serde(rename = "Phase1LifetimeSeconds", skip_serializing_if = "Option::is_none")]
    pub phase1_lifetime_seconds: Option<i32>,
    #[serde(rename = "Phase2LifetimeSeconds", skip_serializing_if = "Option::is_none")]
    pub phase2_lifetime_seconds: Option<i32>,
    #[serde(rename = "RekeyMarginTimeSeconds", skip_serializing_if = "Option::is_none")]
    pub rekey_margin_time_seconds: Option<i32>,
    #[serde(rename = "RekeyFuzzPercentage", skip_serializing_if = "Option::is_none")]
    pub rekey_fuzz_percentage: Option<i32>,
    #[serde(rename = "ReplayWindowSize", skip_serializing_if = "Option::is_none")]
    pub replay_window_size: Option<i32>,
    /// The number of seconds after which a DPD timeout occurs.
    #[serde(rename = "DPDTimeoutSeconds", skip_serializing_if = "Option::is_none")]
    pub dpd_timeout_seconds: Option<i32>,
    #[serde(rename = "Phase1EncryptionAlgorithms", skip_serializing_if = "Option::is_none")]
    pub phase1_encryption_algorithms: Option<Vec<Phase1EncryptionAlgorithmsRequestListValue>>,
    #[serde(rename = "Phase2EncryptionAlgorithms", skip_serializing_if = "Option::is_none")]
    pub phase2_encryption_algorithms: Option<Vec<Phase2EncryptionAlgorithmsRequestListValue>>,
    #[serde(rename = "Phase1IntegrityAlgorithms", skip_serializing_if = "Option::is_none")]
    pub phase1_integrity_algorithms: Option<Vec<Phase1IntegrityAlgorithmsRequestListValue>>,
    #[serde(rename = "Phase2IntegrityAlgorithms", skip_serializing_if = "Option::is_none")]
    pub phase2_integrity_algorithms: Option<Vec<Phase2IntegrityAlgorithmsRequestListValue>>,
    #[serde(rename = "Phase1DHGroupNumbers", skip_serializing_if = "Option::is_none")]
    pub phase1_dh_group_numbers: Option<Vec<Phase1DHGroupNumbersRequestListValue>>,
    #[serde(rename = "Phase2DHGroupNumbers", skip_serializing_if = "Option::is_none")]
    pub phase2_dh_group_numbers: Option<Vec<Phase2DHGroupNumbersRequestListValue>>,
    #[serde(rename = "IKEVersions", skip_serializing_if = "Option::is_none")]
    pub ike_versions: Option<Vec<IKEVersionsRequestListValue>>,
}

impl VpnTunnelOptionsSpecification {
    /// Returns the `TunnelInsideCidr` member.
    #[must_use]
    pub fn tunnel_inside_cidr(&self) -> Option<&str> {
        self.tunnel_inside_cidr.as_deref()
    }

    /// Sets the `TunnelInsideCidr` member, replacing any previous value.
    pub fn set_tunnel_inside_cidr(&mut self, tunnel_inside_cidr: Option<String>) {
        self.tunnel_inside_cidr = tunnel_inside_cidr;
    }

    /// Sets the `TunnelInsideCidr` member and returns the updated value.
    #[must_use]
    pub fn with_tunnel_inside_cidr(mut self, tunnel_inside_cidr: impl Into<String>) -> Self {
        self.tunnel_inside_cidr = Some(tunnel_inside_cidr.into());
        self
    }

    /// Returns the `PreSharedKey` member.
    #[must_use]
    pub fn pre_shared_key(&self) -> Option<&str> {
        self.pre_shared_key.as_deref()
    }

    /// Sets the `PreSharedKey` member, replacing any previous value.
    pub fn set_pre_shared_key(&mut self, pre_shared_key: Option<String>) {
        self.pre_shared_key = pre_shared_key;
    }

    /// Sets the `PreSharedKey` member and returns the updated value.
    #[must_use]
    pub fn with_pre_shared_key(mut self, pre_shared_key: impl Into<String>) -> Self {
        self.pre_shared_key = Some(pre_shared_key.into());
        self
    }

    /// Returns the `Phase1LifetimeSeconds` member.
    #[must_use]
    pub fn phase1_lifetime_seconds(&self) -> Option<i32> {
        self.phase1_lifetime_seconds
    }

    /// Sets the `Phase1LifetimeSeconds` member, replacing any previous value.
    pub fn set_phase1_lifetime_seconds(&mut self, phase1_lifetime_seconds: Option<i32>) {
        self.phase1_lifetime_seconds = phase1_lifetime_seconds;
    }

    /// Sets the `Phase1LifetimeSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_phase1_lifetime_seconds(mut self, phase1_lifetime_seconds: impl Into<i32>) -> Self {
        self.phase1_lifetime_seconds = Some(phase1_lifetime_seconds.into());
        self
    }

    /// Returns the `Phase2LifetimeSeconds` member.
    #[must_use]
    pub fn phase2_lifetime_seconds(&self) -> Option<i32> {
        self.phase2_lifetime_seconds
    }

    /// Sets the `Phase2LifetimeSeconds` member, replacing any previous value.
    pub fn set_phase2_lifetime_seconds(&mut self, phase2_lifetime_seconds: Option<i32>) {
        self.phase2_lifetime_seconds = phase2_lifetime_seconds;
    }

    /// Sets the `Phase2LifetimeSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_phase2_lifetime_seconds(mut self, phase2_lifetime_seconds: impl Into<i32>) -> Self {
        self.phase2_lifetime_seconds = Some(phase2_lifetime_seconds.into());
        self
    }

    /// Returns the `RekeyMarginTimeSeconds` member.
    #[must_use]
    pub fn rekey_margin_time_seconds(&self) -> Option<i32> {
        self.rekey_margin_time_seconds
    }

    /// Sets the `RekeyMarginTimeSeconds` member, replacing any previous value.
    pub fn set_rekey_margin_time_seconds(&mut self, rekey_margin_time_seconds: Option<i32>) {
        self.rekey_margin_time_seconds = rekey_margin_time_seconds;
    }

    /// Sets the `RekeyMarginTimeSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_rekey_margin_time_seconds(
        mut self,
        rekey_margin_time_seconds: impl Into<i32>,
    ) -> Self {
        self.rekey_margin_time_seconds = Some(rekey_margin_time_seconds.into());
        self
    }

    /// Returns the `RekeyFuzzPercentage` member.
    #[must_use]
    pub fn rekey_fuzz_percentage(&self) -> Option<i32> {
        self.rekey_fuzz_percentage
    }

    /// Sets the `RekeyFuzzPercentage` member, replacing any previous value.
    pub fn set_rekey_fuzz_percentage(&mut self, rekey_fuzz_percentage: Option<i32>) {
        self.rekey_fuzz_percentage = rekey_fuzz_percentage;
    }

    /// Sets the `RekeyFuzzPercentage` member and returns the updated value.
    #[must_use]
    pub fn with_rekey_fuzz_percentage(mut self, rekey_fuzz_percentage: impl Into<i32>) -> Self {
        self.rekey_fuzz_percentage = Some(rekey_fuzz_percentage.into());
        self
    }

    /// Returns the `ReplayWindowSize` member.
    #[must_use]
    pub fn replay_window_size(&self) -> Option<i32> {
        self.replay_window_size
    }

    /// Sets the `ReplayWindowSize` member, replacing any previous value.
    pub fn set_replay_window_size(&mut self, replay_window_size: Option<i32>) {
        self.replay_window_size = replay_window_size;
    }

    /// Sets the `ReplayWindowSize` member and returns the updated value.
    #[must_use]
    pub fn with_replay_window_size(mut self, replay_window_size: impl Into<i32>) -> Self {
        self.replay_window_size = Some(replay_window_size.into());
        self
    }

    /// Returns the `DPDTimeoutSeconds` member.
    #[must_use]
    pub fn dpd_timeout_seconds(&self) -> Option<i32> {
        self.dpd_timeout_seconds
    }

    /// Sets the `DPDTimeoutSeconds` member, replacing any previous value.
    pub fn set_dpd_timeout_seconds(&mut self, dpd_timeout_seconds: Option<i32>) {
        self.dpd_timeout_seconds = dpd_timeout_seconds;
    }

    /// Sets the `DPDTimeoutSeconds` member and returns the updated value.
    #[must_use]
    pub fn with_dpd_timeout_seconds(mut self, dpd_timeout_seconds: impl Into<i32>) -> Self {
        self.dpd_timeout_seconds = Some(dpd_timeout_seconds.into());
        self
    }

    /// Returns the `Phase1EncryptionAlgorithms` member.
    #[must_use]
    pub fn phase1_encryption_algorithms(
        &self,
    ) -> Option<&[Phase1EncryptionAlgorithmsRequestListValue]> {
        self.phase1_encryption_algorithms.as_deref()
    }

    /// Sets the `Phase1EncryptionAlgorithms` member, replacing any previous value.
    pub fn set_phase1_encryption_algorithms(
        &mut self,
        phase1_encryption_algorithms: Option<Vec<Phase1EncryptionAlgorithmsRequestListValue>>,
    ) {
        self.phase1_encryption_algorithms = phase1_encryption_algorithms;
    }

    /// Appends to the `Phase1EncryptionAlgorithms` member and returns the updated value.
    #[must_use]
    pub fn with_phase1_encryption_algorithms(
        mut self,
        phase1_encryption_algorithms: impl IntoIterator<Item = impl Into<Phase1EncryptionAlgorithmsRequestListValue>>,
    ) -> Self {
        self.phase1_encryption_algorithms
            .get_or_insert_with(Vec::new)
            .extend(phase1_encryption_algorithms.into_iter().map(Into::into));
        self
    }

    /// Returns the `Phase2EncryptionAlgorithms` member.
    #[must_use]
    pub fn phase2_encryption_algorithms(
        &self,
    ) -> Option<&[Phase2EncryptionAlgorithmsRequestListValue]> {
        self.phase2_encryption_algorithms.as_deref()
    }

    /// Sets the `Phase2EncryptionAlgorithms` member, replacing any previous value.
    pub fn set_phase2_encryption_algorithms(
        &mut self,
        phase2_encryption_algorithms: Option<Vec<Phase2EncryptionAlgorithmsRequestListValue>>,
    ) {
        self.phase2_encryption_algorithms = phase2_encryption_algorithms;
    }

    /// Appends to the `Phase2EncryptionAlgorithms` member and returns the updated value.
    #[must_use]
    pub fn with_phase2_encryption_algorithms(
        mut self,
        phase2_encryption_algorithms: impl IntoIterator<Item = impl Into<Phase2EncryptionAlgorithmsRequestListValue>>,
    ) -> Self {
        self.phase2_encryption_algorithms
            .get_or_insert_with(Vec::new)
            .extend(phase2_encryption_algorithms.into_iter().map(Into::into));
        self
    }

    /// Returns the `Phase1IntegrityAlgorithms` member.
    #[must_use]
    pub fn phase1_integrity_algorithms(
        &self,
    ) -> Option<&[Phase1IntegrityAlgorithmsRequestListValue]> {
        self.phase1_integrity_algorithms.as_deref()
    }

    /// Sets the `Phase1IntegrityAlgorithms` member, replacing any previous value.
    pub fn set_phase1_integrity_algorithms(
        &mut self,
        phase1_integrity_algorithms: Option<Vec<Phase1IntegrityAlgorithmsRequestListValue>>,
    ) {
        self.phase1_integrity_algorithms = phase1_integrity_algorithms;
    }

    /// Appends to the `Phase1IntegrityAlgorithms` member and returns the updated value.
    #[must_use]
    pub fn with_phase1_integrity_algorithms(
        mut self,
        phase1_integrity_algorithms: impl IntoIterator<Item = impl Into<Phase1IntegrityAlgorithmsRequestListValue>>,
    ) -> Self {
        self.phase1_integrity_algorithms
            .get_or_insert_with(Vec::new)
            .extend(phase1_integrity_algorithms.into_iter().map(Into::into));
        self
    }

    /// Returns the `Phase2IntegrityAlgorithms` member.
    #[must_use]
    pub fn phase2_integrity_algorithms(
        &self,
    ) -> Option<&[Phase2IntegrityAlgorithmsRequestListValue]> {
        self.phase2_integrity_algorithms.as_deref()
    }

    /// Sets the `Phase2IntegrityAlgorithms` member, replacing any previous value.
    pub fn set_phase2_integrity_algorithms(
        &mut self,
        phase2_integrity_algorithms: Option<Vec<Phase2IntegrityAlgorithmsRequestListValue>>,
    ) {
        self.phase2_integrity_algorithms = phase2_integrity_algorithms;
    }

    /// Appends to the `Phase2IntegrityAlgorithms` member and returns the updated value.
    #[must_use]
    pub fn with_phase2_integrity_algorithms(
        mut self,
        phase2_integrity_algorithms: impl IntoIterator<Item = impl Into<Phase2IntegrityAlgorithmsRequestListValue>>,
    ) -> Self {
        self.phase2_integrity_algorithms
            .get_or_insert_with(Vec::new)
            .extend(phase2_integrity_algorithms.into_iter().map(Into::into));
        self
    }

    /// Returns the `Phase1DHGroupNumbers` member.
    #[must_use]
    pub fn phase1_dh_group_numbers(&self) -> Option<&[Phase1DHGroupNumbersRequestListValue]> {
        self.phase1_dh_group_numbers.as_deref()
    }

    /// Sets the `Phase1DHGroupNumbers` member, replacing any previous value.
    pub fn set_phase1_dh_group_numbers(
        &mut self,
        phase1_dh_group_numbers: Option<Vec<Phase1DHGroupNumbersRequestListValue>>,
    ) {
        self.phase1_dh_group_numbers = phase1_dh_group_numbers;
    }

    /// Appends to the `Phase1DHGroupNumbers` member and returns the updated value.
    #[must_use]
    pub fn with_phase1_dh_group_numbers(
        mut self,
        phase1_dh_group_numbers: impl IntoIterator<Item = impl Into<Phase1DHGroupNumbersRequestListValue>>,
    ) -> Self {
        self.phase1_dh_group_numbers
            .get_or_insert_with(Vec::new)
            .extend(phase1_dh_group_numbers.into_iter().map(Into::into));
        self
    }

    /// Returns the `Phase2DHGroupNumbers` member.
    #[must_use]
    pub fn phase2_dh_group_numbers(&self) -> Option<&[Phase2DHGroupNumbersRequestListValue]> {
        self.phase2_dh_group_numbers.as_deref()
    }

    /// Sets the `Phase2DHGroupNumbers` member, replacing any previous value.
    pub fn set_phase2_dh_group_numbers(
        &mut self,
        phase2_dh_group_numbers: Option<Vec<Phase2DHGroupNumbersRequestListValue>>,
    ) {
        self.phase2_dh_group_numbers = phase2_dh_group_numbers;
    }

    /// Appends to the `Phase2DHGroupNumbers` member and returns the updated value.
    #[must_use]
    pub fn with_phase2_dh_group_numbers(
        mut self,
        phase2_dh_group_numbers: impl IntoIterator<Item = impl Into<Phase2DHGroupNumbersRequestListValue>>,
    ) -> Self {
        self.phase2_dh_group_numbers
            .get_or_insert_with(Vec::new)
            .extend(phase2_dh_group_numbers.into_iter().map(Into::into));
        self
    }

    /// Returns the `IKEVersions` member.
    #[must_use]
    pub fn ike_versions(&self) -> Option<&[IKEVersionsRequestListValue]> {
        self.ike_versions.as_deref()
    }

    /// Sets the `IKEVersions` member, replacing any previous value.
    pub fn set_ike_versions(&mut self, ike_versions: Option<Vec<IKEVersionsRequestListValue>>) {
        self.ike_versions = ike_versions;
    }

    /// Appends to the `IKEVersions` member and returns the updated value.
    #[must_use]
    pub fn with_ike_versions(
        mut self,
        ike_versions: impl IntoIterator<Item = impl Into<IKEVersionsRequestListValue>>,
    ) -> Self {
        self.ike_versions
            .get_or_insert_with(Vec::new)
            .extend(ike_versions.into_iter().map(Into::into));
        self
    }
}

impl Shape for VpnTunnelOptionsSpecification {
    const SHAPE_NAME: &'static str = "VpnTunnelOptionsSpecification";

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("TunnelInsideCidr", false, self.tunnel_inside_cidr.as_ref()),
            Member::new("PreSharedKey", false, self.pre_shared_key.as_ref()),
            Member::new("Phase1LifetimeSeconds", false, self.phase1_lifetime_seconds.as_ref()),
            Member::new("Phase2LifetimeSeconds", false, self.phase2_lifetime_seconds.as_ref()),
            Member::new("RekeyMarginTimeSeconds", false, self.rekey_margin_time_seconds.as_ref()),
            Member::new("RekeyFuzzPercentage", false, self.rekey_fuzz_percentage.as_ref()),
            Member::new("ReplayWindowSize", false, self.replay_window_size.as_ref()),
            Member::new("DPDTimeoutSeconds", false, self.dpd_timeout_seconds.as_ref()),
            Member::new(
                "Phase1EncryptionAlgorithms",
                false,
                self.phase1_encryption_algorithms.as_ref(),
            ),
            Member::new(
                "Phase2EncryptionAlgorithms",
                false,
                self.phase2_encryption_algorithms.as_ref(),
            ),
            Member::new(
                "Phase1IntegrityAlgorithms",
                false,
                self.phase1_integrity_algorithms.as_ref(),
            ),
            Member::new(
                "Phase2IntegrityAlgorithms",
                false,
                self.phase2_integrity_algorithms.as_ref(),
            ),
            Member::new("Phase1DHGroupNumbers", false, self.phase1_dh_group_numbers.as_ref()),
            Member::new("Phase2DHGroupNumbers", false, self.phase2_dh_group_numbers.as_ref()),
            Member::new("IKEVersions", false, self.ike_versions.as_ref()),
        ]
    }
}

impl fmt::Display for VpnTunnelOptionsSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

