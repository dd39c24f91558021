//! Structured record view over the generated shapes.
//!
//! Every request, result, and nested structure implements [`Shape`], which
//! exposes its fields as an ordered list of [`Member`]s. Rendering, stable
//! hashing, and required-member reporting are all computed from that view, and
//! an external transport can walk the same view to marshal a shape.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use xxhash_rust::xxh3::xxh3_64;

/// Multiplier used when folding member hashes.
const HASH_MULTIPLIER: u64 = 31;

/// Hash of `true`.
const TRUE_HASH: u64 = 1231;

/// Hash of `false`.
const FALSE_HASH: u64 = 1237;

/// A borrowed view of one present field value.
///
/// Floats compare by bit pattern, so `NaN` equals itself and `0.0` differs
/// from `-0.0`.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// A string.
    String(&'a str),
    /// A boolean.
    Boolean(bool),
    /// A 32-bit integer.
    Integer(i32),
    /// A 64-bit integer.
    Long(i64),
    /// A single-precision float.
    Float(f32),
    /// A double-precision float.
    Double(f64),
    /// A UTC timestamp.
    Timestamp(&'a DateTime<Utc>),
    /// The wire literal of an enumerated value.
    Enum(&'a str),
    /// An ordered list of values.
    List(Vec<FieldValue<'a>>),
    /// A nested shape: its model name and members.
    Structure(&'static str, Vec<Member<'a>>),
}

/// One member of a shape, present or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<'a> {
    /// Wire name of the member (e.g. `DryRun`).
    pub name: &'static str,
    /// Whether the model marks the member as required.
    pub required: bool,
    /// The current value, `None` when absent.
    pub value: Option<FieldValue<'a>>,
}

impl<'a> Member<'a> {
    /// Build a member from an optional field reference.
    #[must_use]
    pub fn new<T: ToFieldValue + ?Sized>(
        name: &'static str,
        required: bool,
        value: Option<&'a T>,
    ) -> Self {
        Self {
            name,
            required,
            value: value.map(ToFieldValue::to_field_value),
        }
    }

    /// Whether the member currently holds a value.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// Conversion of a stored field into its record view.
pub trait ToFieldValue {
    /// Borrow this value as a [`FieldValue`].
    fn to_field_value(&self) -> FieldValue<'_>;
}

/// A generated request, result, or nested structure.
pub trait Shape {
    /// Name of the shape in the EC2 model.
    const SHAPE_NAME: &'static str;

    /// All members in declaration order, absent ones included.
    fn members(&self) -> Vec<Member<'_>>;

    /// A hash that is stable across runs and processes and consistent with
    /// equality.
    fn shape_hash(&self) -> u64 {
        hash_members(Self::SHAPE_NAME, &self.members())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Long(*self)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Double(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(ToFieldValue::to_field_value).collect())
    }
}

impl<T: Shape> ToFieldValue for T {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Structure(T::SHAPE_NAME, self.members())
    }
}

impl PartialEq for FieldValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) | (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Structure(a, x), Self::Structure(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl Eq for FieldValue<'_> {}

impl FieldValue<'_> {
    /// Stable hash of this value.
    #[must_use]
    pub fn stable_hash(&self) -> u64 {
        match self {
            Self::String(s) | Self::Enum(s) => xxh3_64(s.as_bytes()),
            Self::Boolean(b) => {
                if *b {
                    TRUE_HASH
                } else {
                    FALSE_HASH
                }
            }
            Self::Integer(v) => u64::from_ne_bytes(i64::from(*v).to_ne_bytes()),
            Self::Long(v) => u64::from_ne_bytes(v.to_ne_bytes()),
            Self::Float(v) => u64::from(v.to_bits()),
            Self::Double(v) => v.to_bits(),
            Self::Timestamp(t) => {
                let secs = u64::from_ne_bytes(t.timestamp().to_ne_bytes());
                secs.wrapping_mul(HASH_MULTIPLIER)
                    .wrapping_add(u64::from(t.timestamp_subsec_nanos()))
            }
            Self::List(items) => items.iter().fold(1, |acc, item| {
                acc.wrapping_mul(HASH_MULTIPLIER)
                    .wrapping_add(item.stable_hash())
            }),
            Self::Structure(name, members) => hash_members(name, members),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Enum(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Timestamp(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Structure(_, members) => write_members(f, members),
        }
    }
}

/// Render a shape as `{Name: value, Name: value}`, listing present members only.
pub fn render<S: Shape>(shape: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_members(f, &shape.members())
}

/// Names of the required members that are currently absent.
#[must_use]
pub fn missing_required<S: Shape>(shape: &S) -> Vec<&'static str> {
    shape
        .members()
        .into_iter()
        .filter(|m| m.required && !m.is_present())
        .map(|m| m.name)
        .collect()
}

fn write_members(f: &mut fmt::Formatter<'_>, members: &[Member<'_>]) -> fmt::Result {
    f.write_str("{")?;
    let mut first = true;
    for member in members {
        let Some(value) = &member.value else {
            continue;
        };
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write!(f, "{}: {value}", member.name)?;
    }
    f.write_str("}")
}

fn hash_members(name: &str, members: &[Member<'_>]) -> u64 {
    members.iter().fold(xxh3_64(name.as_bytes()), |acc, member| {
        let value_hash = member.value.as_ref().map_or(0, FieldValue::stable_hash);
        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(value_hash)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::input::{
        CreateFlowLogsInput, CreateRouteInput, CreateVolumeInput, DescribeImagesInput,
        RunInstancesInput,
    };
    use crate::output::CreateVolumeOutput;
    use crate::types::{
        Filter, FleetData, HttpTokensState, Instance, InstanceMetadataOptionsResponse,
        InstanceType, Monitoring, MonitoringState, PricingDetail, ReservedInstancesOffering, Tag,
        Volume, VolumeType,
    };

    fn full_instance() -> Instance {
        Instance::default()
            .with_ami_launch_index(0)
            .with_image_id("ami-12345678")
            .with_instance_type(InstanceType::T2Micro)
            .with_launch_time(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap())
            .with_monitoring(Monitoring::default().with_state(MonitoringState::Enabled))
            .with_ebs_optimized(false)
            .with_tags([Tag::default().with_key("Name").with_value("web")])
    }

    #[test]
    fn test_should_round_trip_absence_for_every_field_kind() {
        let empty = Instance::default();
        assert_eq!(empty.ami_launch_index(), None);
        assert_eq!(empty.image_id(), None);
        assert_eq!(empty.instance_type(), None);
        assert_eq!(empty.launch_time(), None);
        assert_eq!(empty.monitoring(), None);
        assert_eq!(empty.ebs_optimized(), None);
        assert_eq!(empty.tags(), None);

        let mut instance = full_instance();
        assert_eq!(instance.ami_launch_index(), Some(0));
        assert_eq!(instance.ebs_optimized(), Some(false));
        assert_eq!(instance.image_id(), Some("ami-12345678"));
        instance.set_ami_launch_index(None);
        instance.set_image_id(None);
        instance.set_instance_type(None);
        instance.set_launch_time(None);
        instance.set_monitoring(None);
        instance.set_ebs_optimized(None);
        instance.set_tags(None);
        assert_eq!(instance, empty);

        let mut offering = ReservedInstancesOffering::default()
            .with_duration(31_536_000_i64)
            .with_fixed_price(0.0_f32);
        assert_eq!(offering.duration(), Some(31_536_000));
        assert_eq!(offering.fixed_price(), Some(0.0));
        offering.set_duration(None);
        offering.set_fixed_price(None);
        assert_eq!(offering, ReservedInstancesOffering::default());
    }

    #[test]
    fn test_should_build_same_value_with_setters() {
        let built = CreateVolumeInput::default()
            .with_availability_zone("us-east-1a")
            .with_size(8)
            .with_volume_type(VolumeType::Gp3)
            .with_encrypted(true);

        let mut set = CreateVolumeInput::default();
        set.set_availability_zone(Some("us-east-1a".to_owned()));
        set.set_size(Some(8));
        set.set_volume_type(Some(VolumeType::Gp3));
        set.set_encrypted(Some(true));

        assert_eq!(built, set);
        assert_eq!(built.shape_hash(), set.shape_hash());
    }

    #[test]
    fn test_should_accrete_list_members() {
        let filter = Filter::default()
            .with_name("state")
            .with_values(["x"])
            .with_values(["y"]);
        assert_eq!(filter.values(), Some(["x".to_owned(), "y".to_owned()].as_slice()));

        let mut filter = filter;
        filter.set_values(Some(vec!["x".to_owned(), "y".to_owned()]));
        let filter = filter.with_values(["z"]);
        assert_eq!(filter.to_string(), "{Name: state, Values: [x, y, z]}");

        let mut replaced = filter.clone();
        replaced.set_values(Some(Vec::new()));
        assert_eq!(replaced.values(), Some([].as_slice()));
        assert_ne!(replaced, filter);
    }

    #[test]
    fn test_should_compare_structurally() {
        let empty = Instance::default();
        let full = full_instance();
        assert_eq!(empty, empty.clone());
        assert_eq!(full, full.clone());
        assert_ne!(empty, full);
        assert_ne!(full, empty);

        let set: HashSet<Instance> = [full.clone(), full_instance(), empty.clone()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);

        assert_eq!(full.shape_hash(), full_instance().shape_hash());
        assert_ne!(full.shape_hash(), empty.shape_hash());
    }

    #[test]
    fn test_should_hash_deterministically() {
        let expected = xxh3_64(b"Tag")
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_mul(HASH_MULTIPLIER);
        assert_eq!(Tag::default().shape_hash(), expected);

        let tag = Tag::default().with_key("Name");
        let expected = xxh3_64(b"Tag")
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(xxh3_64(b"Name"))
            .wrapping_mul(HASH_MULTIPLIER);
        assert_eq!(tag.shape_hash(), expected);
    }

    #[test]
    fn test_should_treat_nan_prices_as_equal_to_themselves() {
        let detail = PricingDetail::default().with_count(1).with_price(f64::NAN);
        assert_eq!(detail, detail.clone());
        assert_eq!(detail.shape_hash(), detail.clone().shape_hash());
        assert_eq!(detail.members(), detail.clone().members());

        let offering = ReservedInstancesOffering::default()
            .with_fixed_price(f32::NAN)
            .with_pricing_details([detail.clone()]);
        assert_eq!(offering, offering.clone());

        let set: HashSet<PricingDetail> = [detail.clone(), detail.clone()].into_iter().collect();
        assert_eq!(set.len(), 1);

        let fleet = FleetData::default()
            .with_fleet_id("fleet-1")
            .with_fulfilled_capacity(f64::NAN);
        let fleets: HashSet<FleetData> = [fleet.clone(), fleet].into_iter().collect();
        assert_eq!(fleets.len(), 1);
    }

    #[test]
    fn test_should_distinguish_signed_zero_floats() {
        let positive = PricingDetail::default().with_count(1).with_price(0.0);
        let negative = PricingDetail::default().with_count(1).with_price(-0.0);
        assert_ne!(positive, negative);
        assert_ne!(positive.shape_hash(), negative.shape_hash());
        assert_eq!(positive, PricingDetail::default().with_count(1).with_price(0.0));
        assert_eq!(
            positive.shape_hash(),
            PricingDetail::default().with_count(1).with_price(0.0).shape_hash()
        );

        let set: HashSet<ReservedInstancesOffering> = [
            ReservedInstancesOffering::default().with_usage_price(0.0_f32),
            ReservedInstancesOffering::default().with_usage_price(-0.0_f32),
            ReservedInstancesOffering::default().with_usage_price(0.0_f32),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_should_normalise_enum_entry_points() {
        let mut from_string = InstanceMetadataOptionsResponse::default();
        from_string.set_http_tokens(Some("required".into()));
        let typed =
            InstanceMetadataOptionsResponse::default().with_http_tokens(HttpTokensState::Required);
        assert_eq!(from_string, typed);
        assert_eq!(from_string.shape_hash(), typed.shape_hash());
        assert_eq!(
            from_string.http_tokens().map(HttpTokensState::as_str),
            Some("required")
        );

        let unknown = InstanceMetadataOptionsResponse::default().with_http_tokens("mandatory");
        assert_eq!(
            unknown.http_tokens(),
            Some(&HttpTokensState::Unknown("mandatory".to_owned()))
        );
        assert_eq!(unknown.to_string(), "{HttpTokens: mandatory}");
        assert_eq!(
            serde_json::to_value(&unknown).expect("serialize"),
            json!({ "HttpTokens": "mandatory" })
        );
    }

    #[test]
    fn test_should_render_present_members_in_order() {
        assert_eq!(CreateRouteInput::default().to_string(), "{}");

        let route = CreateRouteInput::default()
            .with_route_table_id("rtb-1")
            .with_dry_run(true)
            .with_destination_cidr_block("10.0.0.0/16");
        assert_eq!(
            route.to_string(),
            "{DestinationCidrBlock: 10.0.0.0/16, DryRun: true, RouteTableId: rtb-1}"
        );

        let images = DescribeImagesInput::default()
            .with_image_ids(["ami-1"])
            .with_filters([Filter::default().with_name("state").with_values(["available"])]);
        assert_eq!(
            images.to_string(),
            "{Filters: [{Name: state, Values: [available]}], ImageIds: [ami-1]}"
        );

        let volume = Volume::default()
            .with_create_time(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap())
            .with_size(8);
        assert_eq!(
            volume.to_string(),
            "{CreateTime: 2020-01-02T03:04:05.000Z, Size: 8}"
        );
        assert_eq!(
            PricingDetail::default().with_price(0.25).to_string(),
            "{Price: 0.25}"
        );
    }

    #[test]
    fn test_should_expose_all_members_in_order() {
        let route = CreateRouteInput::default().with_route_table_id("rtb-1");
        let members = route.members();
        assert_eq!(members.len(), 15);
        assert_eq!(members[0].name, "DestinationCidrBlock");
        assert!(!members[0].is_present());

        let table = members
            .iter()
            .find(|m| m.name == "RouteTableId")
            .expect("member");
        assert!(table.required);
        assert_eq!(table.value, Some(FieldValue::String("rtb-1")));
    }

    #[test]
    fn test_should_report_missing_required_members() {
        assert_eq!(missing_required(&CreateRouteInput::default()), ["RouteTableId"]);
        assert!(
            missing_required(&CreateRouteInput::default().with_route_table_id("rtb-1")).is_empty()
        );
        assert_eq!(
            missing_required(&CreateFlowLogsInput::default().with_resource_ids(["vpc-1"])),
            ["ResourceType", "TrafficType"]
        );
        let run = RunInstancesInput::default()
            .with_image_id("ami-1")
            .with_max_count(1);
        assert_eq!(missing_required(&run), ["MinCount"]);
    }

    #[test]
    fn test_should_skip_absent_members_when_serializing() {
        let input = CreateVolumeInput::default()
            .with_availability_zone("us-east-1a")
            .with_size(8);
        let value = serde_json::to_value(&input).expect("serialize");
        assert_eq!(value, json!({ "AvailabilityZone": "us-east-1a", "Size": 8 }));

        let parsed: CreateVolumeInput = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed, input);
        assert_eq!(parsed.dry_run(), None);

        let output = CreateVolumeOutput::default().with_volume(
            Volume::default()
                .with_volume_id("vol-1")
                .with_create_time(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()),
        );
        let json = serde_json::to_string(&output).expect("serialize");
        let parsed: CreateVolumeOutput = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, output);
        assert_eq!(
            serde_json::to_string(&CreateVolumeOutput::default()).expect("serialize"),
            "{}"
        );
    }
}
