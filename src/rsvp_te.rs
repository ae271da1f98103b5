// Copyright (C) 2024-present The bgp-ext-pkt Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data types for RSVP-TE objects carried inside a BGP-LS TE-LSP attribute.
//! Each object is keyed on the wire by a `(class-num, c-type)` pair
//! ([RFC3209](https://datatracker.ietf.org/doc/html/rfc3209),
//! [RFC4090](https://datatracker.ietf.org/doc/html/rfc4090),
//! [RFC4874](https://datatracker.ietf.org/doc/html/rfc4874)).

use ipnet::{Ipv4Net, Ipv6Net};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use strum_macros::Display;

/// Attributes of a TE-LSP object: at most one instance of each RSVP-TE object
/// flavor. A repeated object within one attribute overwrites the earlier
/// instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeLspAttributes {
    pub sender_tspec: Option<SenderTspecObject>,
    pub flow_spec: Option<FlowSpecObject>,
    pub session_attribute: Option<SessionAttributeObject>,
    pub explicit_route: Option<ExplicitRouteObject>,
    pub record_route: Option<RecordRouteObject>,
    pub fast_reroute: Option<FastRerouteObject>,
    pub detour: Option<DetourObject>,
    pub exclude_route: Option<ExcludeRouteObject>,
    pub secondary_explicit_route: Option<SecondaryExplicitRouteObject>,
    pub secondary_record_route: Option<SecondaryRecordRouteObject>,
    pub lsp_attributes: Option<LspAttributesObject>,
    pub lsp_required_attributes: Option<LspRequiredAttributesObject>,
    pub protection: Option<ProtectionObject>,
    pub association: Option<AssociationObject>,
    pub primary_path_route: Option<PrimaryPathRouteObject>,
    pub admin_status: Option<AdminStatusObject>,
    pub bandwidth: Option<BandwidthObject>,
    pub metric: Option<MetricObject>,
}

impl TeLspAttributes {
    /// TLV code of the enclosing TE-LSP attribute wrapper
    pub const TLV_TYPE: u16 = 99;

    /// Stores an object under its flavor's field. A second object of the same
    /// flavor replaces the first.
    pub fn set(&mut self, object: RsvpTeObject) {
        match object {
            RsvpTeObject::SenderTspec(obj) => self.sender_tspec = Some(obj),
            RsvpTeObject::FlowSpec(obj) => self.flow_spec = Some(obj),
            RsvpTeObject::SessionAttribute(obj) => self.session_attribute = Some(obj),
            RsvpTeObject::ExplicitRoute(obj) => self.explicit_route = Some(obj),
            RsvpTeObject::RecordRoute(obj) => self.record_route = Some(obj),
            RsvpTeObject::FastReroute(obj) => self.fast_reroute = Some(obj),
            RsvpTeObject::Detour(obj) => self.detour = Some(obj),
            RsvpTeObject::ExcludeRoute(obj) => self.exclude_route = Some(obj),
            RsvpTeObject::SecondaryExplicitRoute(obj) => {
                self.secondary_explicit_route = Some(obj)
            }
            RsvpTeObject::SecondaryRecordRoute(obj) => self.secondary_record_route = Some(obj),
            RsvpTeObject::LspAttributes(obj) => self.lsp_attributes = Some(obj),
            RsvpTeObject::LspRequiredAttributes(obj) => self.lsp_required_attributes = Some(obj),
            RsvpTeObject::Protection(obj) => self.protection = Some(obj),
            RsvpTeObject::Association(obj) => self.association = Some(obj),
            RsvpTeObject::PrimaryPathRoute(obj) => self.primary_path_route = Some(obj),
            RsvpTeObject::AdminStatus(obj) => self.admin_status = Some(obj),
            RsvpTeObject::Bandwidth(obj) => self.bandwidth = Some(obj),
            RsvpTeObject::Metric(obj) => self.metric = Some(obj),
        }
    }
}

/// The closed set of RSVP-TE object flavors this implementation can decode.
#[derive(Display, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RsvpTeObject {
    SenderTspec(SenderTspecObject),
    FlowSpec(FlowSpecObject),
    SessionAttribute(SessionAttributeObject),
    ExplicitRoute(ExplicitRouteObject),
    RecordRoute(RecordRouteObject),
    FastReroute(FastRerouteObject),
    Detour(DetourObject),
    ExcludeRoute(ExcludeRouteObject),
    SecondaryExplicitRoute(SecondaryExplicitRouteObject),
    SecondaryRecordRoute(SecondaryRecordRouteObject),
    LspAttributes(LspAttributesObject),
    LspRequiredAttributes(LspRequiredAttributesObject),
    Protection(ProtectionObject),
    Association(AssociationObject),
    PrimaryPathRoute(PrimaryPathRouteObject),
    AdminStatus(AdminStatusObject),
    Bandwidth(BandwidthObject),
    Metric(MetricObject),
}

impl RsvpTeObject {
    pub const fn class_num(&self) -> u8 {
        match self {
            Self::SenderTspec(_) => SenderTspecObject::CLASS_NUM,
            Self::FlowSpec(_) => FlowSpecObject::CLASS_NUM,
            Self::SessionAttribute(_) => SessionAttributeObject::CLASS_NUM,
            Self::ExplicitRoute(_) => ExplicitRouteObject::CLASS_NUM,
            Self::RecordRoute(_) => RecordRouteObject::CLASS_NUM,
            Self::FastReroute(_) => FastRerouteObject::CLASS_NUM,
            Self::Detour(_) => DetourObject::CLASS_NUM,
            Self::ExcludeRoute(_) => ExcludeRouteObject::CLASS_NUM,
            Self::SecondaryExplicitRoute(_) => SecondaryExplicitRouteObject::CLASS_NUM,
            Self::SecondaryRecordRoute(_) => SecondaryRecordRouteObject::CLASS_NUM,
            Self::LspAttributes(_) => LspAttributesObject::CLASS_NUM,
            Self::LspRequiredAttributes(_) => LspRequiredAttributesObject::CLASS_NUM,
            Self::Protection(_) => ProtectionObject::CLASS_NUM,
            Self::Association(_) => AssociationObject::CLASS_NUM,
            Self::PrimaryPathRoute(_) => PrimaryPathRouteObject::CLASS_NUM,
            Self::AdminStatus(_) => AdminStatusObject::CLASS_NUM,
            Self::Bandwidth(_) => BandwidthObject::CLASS_NUM,
            Self::Metric(_) => MetricObject::CLASS_NUM,
        }
    }

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::SenderTspec(_) => SenderTspecObject::C_TYPE,
            Self::FlowSpec(_) => FlowSpecObject::C_TYPE,
            Self::SessionAttribute(obj) => obj.c_type(),
            Self::ExplicitRoute(_) => ExplicitRouteObject::C_TYPE,
            Self::RecordRoute(_) => RecordRouteObject::C_TYPE,
            Self::FastReroute(obj) => obj.c_type(),
            Self::Detour(obj) => obj.c_type(),
            Self::ExcludeRoute(_) => ExcludeRouteObject::C_TYPE,
            Self::SecondaryExplicitRoute(_) => SecondaryExplicitRouteObject::C_TYPE,
            Self::SecondaryRecordRoute(_) => SecondaryRecordRouteObject::C_TYPE,
            Self::LspAttributes(_) => LspAttributesObject::C_TYPE,
            Self::LspRequiredAttributes(_) => LspRequiredAttributesObject::C_TYPE,
            Self::Protection(obj) => obj.body.c_type(),
            Self::Association(obj) => obj.c_type(),
            Self::PrimaryPathRoute(_) => PrimaryPathRouteObject::C_TYPE,
            Self::AdminStatus(_) => AdminStatusObject::C_TYPE,
            Self::Bandwidth(obj) => obj.c_type(),
            Self::Metric(_) => MetricObject::C_TYPE,
        }
    }
}

/// Token bucket parameters shared by the Sender-Tspec and Flow-Spec objects
/// ([RFC2210](https://datatracker.ietf.org/doc/html/rfc2210))
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspecParameters {
    pub token_bucket_rate: f32,
    pub token_bucket_size: f32,
    pub peak_data_rate: f32,
    pub minimum_policed_unit: u32,
    pub maximum_packet_size: u32,
}

/// Sender-Tspec object, class 12 c-type 2
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderTspecObject(pub TspecParameters);

impl SenderTspecObject {
    pub const CLASS_NUM: u8 = 12;
    pub const C_TYPE: u8 = 2;
}

/// Flow-Spec object, class 9 c-type 2. The service header selects between the
/// controlled-load and guaranteed service layouts; guaranteed service carries
/// an extra rate/slack block.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowSpecObject {
    ControlledLoad {
        tspec: TspecParameters,
    },
    Guaranteed {
        tspec: TspecParameters,
        rate: f32,
        slack_term: u32,
    },
}

impl FlowSpecObject {
    pub const CLASS_NUM: u8 = 9;
    pub const C_TYPE: u8 = 2;

    pub const CONTROLLED_LOAD_SERVICE: u8 = 5;
    pub const GUARANTEED_SERVICE: u8 = 2;

    pub const fn service(&self) -> u8 {
        match self {
            Self::ControlledLoad { .. } => Self::CONTROLLED_LOAD_SERVICE,
            Self::Guaranteed { .. } => Self::GUARANTEED_SERVICE,
        }
    }
}

/// Session-Attribute object, class 207. C-type 1 carries resource affinities,
/// c-type 7 does not ([RFC3209 Section 4.7](https://datatracker.ietf.org/doc/html/rfc3209#section-4.7)).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SessionAttributeObject {
    WithResourceAffinities {
        exclude_any: u32,
        include_any: u32,
        include_all: u32,
        setup_priority: u8,
        holding_priority: u8,
        flags: u8,
        session_name: String,
    },
    Basic {
        setup_priority: u8,
        holding_priority: u8,
        flags: u8,
        session_name: String,
    },
}

impl SessionAttributeObject {
    pub const CLASS_NUM: u8 = 207;
    pub const C_TYPE_WITH_RESOURCE_AFFINITIES: u8 = 1;
    pub const C_TYPE_BASIC: u8 = 7;

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::WithResourceAffinities { .. } => Self::C_TYPE_WITH_RESOURCE_AFFINITIES,
            Self::Basic { .. } => Self::C_TYPE_BASIC,
        }
    }
}

/// Explicit-Route object, class 20 c-type 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplicitRouteObject {
    pub subobjects: Vec<RouteSubobject>,
}

impl ExplicitRouteObject {
    pub const CLASS_NUM: u8 = 20;
    pub const C_TYPE: u8 = 1;
}

/// Record-Route object, class 21 c-type 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRouteObject {
    pub subobjects: Vec<RouteSubobject>,
}

impl RecordRouteObject {
    pub const CLASS_NUM: u8 = 21;
    pub const C_TYPE: u8 = 1;
}

/// Exclude-Route object, class 232 c-type 1
/// ([RFC4874](https://datatracker.ietf.org/doc/html/rfc4874))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludeRouteObject {
    pub subobjects: Vec<RouteSubobject>,
}

impl ExcludeRouteObject {
    pub const CLASS_NUM: u8 = 232;
    pub const C_TYPE: u8 = 1;
}

/// Primary-Path-Route object, class 38 c-type 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryPathRouteObject {
    pub subobjects: Vec<RouteSubobject>,
}

impl PrimaryPathRouteObject {
    pub const CLASS_NUM: u8 = 38;
    pub const C_TYPE: u8 = 1;
}

/// Secondary-Explicit-Route object, class 200 c-type 1
/// ([RFC4873](https://datatracker.ietf.org/doc/html/rfc4873))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryExplicitRouteObject {
    pub subobjects: Vec<RouteSubobject>,
}

impl SecondaryExplicitRouteObject {
    pub const CLASS_NUM: u8 = 200;
    pub const C_TYPE: u8 = 1;
}

/// Secondary-Record-Route object, class 201 c-type 1
/// ([RFC4873](https://datatracker.ietf.org/doc/html/rfc4873))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryRecordRouteObject {
    pub subobjects: Vec<RouteSubobject>,
}

impl SecondaryRecordRouteObject {
    pub const CLASS_NUM: u8 = 201;
    pub const C_TYPE: u8 = 1;
}

/// Fast-Reroute object, class 205. C-type 1 is the full layout with an
/// include-all word, c-type 7 the legacy one without it
/// ([RFC4090 Section 4.1](https://datatracker.ietf.org/doc/html/rfc4090#section-4.1)).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum FastRerouteObject {
    Type1 {
        setup_priority: u8,
        holding_priority: u8,
        hop_limit: u8,
        flags: u8,
        bandwidth: f32,
        include_any: u32,
        exclude_any: u32,
        include_all: u32,
    },
    Legacy {
        setup_priority: u8,
        holding_priority: u8,
        hop_limit: u8,
        bandwidth: f32,
        include_any: u32,
        exclude_any: u32,
    },
}

impl FastRerouteObject {
    pub const CLASS_NUM: u8 = 205;
    pub const C_TYPE_1: u8 = 1;
    pub const C_TYPE_LEGACY: u8 = 7;

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::Type1 { .. } => Self::C_TYPE_1,
            Self::Legacy { .. } => Self::C_TYPE_LEGACY,
        }
    }
}

/// One `(PLR_ID, Avoid_Node_ID)` pair of a Detour object
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DetourEntry<A> {
    pub plr_id: A,
    pub avoid_node_id: A,
}

/// Detour object, class 63, c-type 7 (IPv4) or 8 (IPv6)
/// ([RFC4090 Section 4.2](https://datatracker.ietf.org/doc/html/rfc4090#section-4.2))
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum DetourObject {
    Ipv4(Vec<DetourEntry<Ipv4Addr>>),
    Ipv6(Vec<DetourEntry<Ipv6Addr>>),
}

impl DetourObject {
    pub const CLASS_NUM: u8 = 63;
    pub const C_TYPE_IPV4: u8 = 7;
    pub const C_TYPE_IPV6: u8 = 8;

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::Ipv4(_) => Self::C_TYPE_IPV4,
            Self::Ipv6(_) => Self::C_TYPE_IPV6,
        }
    }
}

/// LSP-Attributes object, class 197 c-type 1
/// ([RFC5420](https://datatracker.ietf.org/doc/html/rfc5420))
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LspAttributesObject {
    pub subobjects: Vec<AttributesSubTlv>,
}

impl LspAttributesObject {
    pub const CLASS_NUM: u8 = 197;
    pub const C_TYPE: u8 = 1;
}

/// LSP-Required-Attributes object, class 67 c-type 1
/// ([RFC5420](https://datatracker.ietf.org/doc/html/rfc5420))
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LspRequiredAttributesObject {
    pub subobjects: Vec<AttributesSubTlv>,
}

impl LspRequiredAttributesObject {
    pub const CLASS_NUM: u8 = 67;
    pub const C_TYPE: u8 = 1;
}

/// An inner `{type:u16}{length:u16}{value}` TLV of the LSP-Attributes
/// objects. Values are opaque here; they must be a multiple of 4 octets.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AttributesSubTlv {
    pub code: u16,
    pub value: Vec<u8>,
}

/// Protection object, class 37
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProtectionObject {
    pub body: ProtectionBody,
}

impl ProtectionObject {
    pub const CLASS_NUM: u8 = 37;
}

/// Protection payload shared between the standalone Protection object and the
/// protection route subobject of SERO/SRRO
/// ([RFC3473 Section 8](https://datatracker.ietf.org/doc/html/rfc3473#section-8),
/// [RFC4872 Section 14](https://datatracker.ietf.org/doc/html/rfc4872#section-14))
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ProtectionBody {
    Type1 {
        secondary: bool,
        link_flags: u8,
    },
    Type2 {
        secondary: bool,
        protecting: bool,
        notification: bool,
        operational: bool,
        lsp_flags: u8,
        link_flags: u8,
        in_place: bool,
        required: bool,
        seg_flags: u8,
    },
}

impl ProtectionBody {
    pub const C_TYPE_1: u8 = 1;
    pub const C_TYPE_2: u8 = 2;

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::Type1 { .. } => Self::C_TYPE_1,
            Self::Type2 { .. } => Self::C_TYPE_2,
        }
    }
}

/// Association object, class 199, c-type 1 (IPv4 source) or 2 (IPv6 source)
/// ([RFC4872 Section 16](https://datatracker.ietf.org/doc/html/rfc4872#section-16))
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum AssociationObject {
    Ipv4 {
        association_type: u16,
        association_id: u16,
        source: Ipv4Addr,
    },
    Ipv6 {
        association_type: u16,
        association_id: u16,
        source: Ipv6Addr,
    },
}

impl AssociationObject {
    pub const CLASS_NUM: u8 = 199;
    pub const C_TYPE_IPV4: u8 = 1;
    pub const C_TYPE_IPV6: u8 = 2;

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::Ipv4 { .. } => Self::C_TYPE_IPV4,
            Self::Ipv6 { .. } => Self::C_TYPE_IPV6,
        }
    }
}

/// Admin-Status object, class 196 c-type 1
/// ([RFC3473 Section 7.1](https://datatracker.ietf.org/doc/html/rfc3473#section-7.1))
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AdminStatusObject {
    pub reflect: bool,
    pub testing: bool,
    pub administratively_down: bool,
    pub deleting: bool,
}

impl AdminStatusObject {
    pub const CLASS_NUM: u8 = 196;
    pub const C_TYPE: u8 = 1;
}

/// Bandwidth object, class 5, c-type 1 or the re-optimization flavor c-type 2
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum BandwidthObject {
    Basic(f32),
    Reoptimization(f32),
}

impl BandwidthObject {
    pub const CLASS_NUM: u8 = 5;
    pub const C_TYPE_BASIC: u8 = 1;
    pub const C_TYPE_REOPTIMIZATION: u8 = 2;

    pub const fn c_type(&self) -> u8 {
        match self {
            Self::Basic(_) => Self::C_TYPE_BASIC,
            Self::Reoptimization(_) => Self::C_TYPE_REOPTIMIZATION,
        }
    }
}

/// Metric object, class 6 c-type 1
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MetricObject {
    pub bound: bool,
    pub computed: bool,
    pub metric_type: u8,
    pub value: u32,
}

impl MetricObject {
    pub const CLASS_NUM: u8 = 6;
    pub const C_TYPE: u8 = 1;
}

/// A route subobject of the ERO/RRO/XRO family of objects. The high bit of
/// the wire type octet is the loose-hop bit; it is stripped off the type
/// before dispatch.
#[derive(Display, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RouteSubobject {
    Ipv4Prefix {
        loose: bool,
        prefix: Ipv4Net,
        attributes: u8,
    },
    Ipv6Prefix {
        loose: bool,
        prefix: Ipv6Net,
        attributes: u8,
    },
    Label {
        loose: bool,
        flags: u8,
        c_type: u8,
        label: u32,
    },
    UnnumberedInterface {
        loose: bool,
        attributes: u8,
        router_id: Ipv4Addr,
        interface_id: u32,
    },
    AsNumber {
        loose: bool,
        asn: u16,
    },
    /// valid only inside an Exclude-Route object
    Srlg {
        loose: bool,
        srlg_id: u32,
        attributes: u8,
    },
    /// valid only inside SERO/SRRO objects
    Protection {
        loose: bool,
        body: ProtectionBody,
    },
}

impl RouteSubobject {
    pub const TYPE_IPV4_PREFIX: u8 = 1;
    pub const TYPE_IPV6_PREFIX: u8 = 2;
    pub const TYPE_LABEL: u8 = 3;
    pub const TYPE_UNNUMBERED_INTERFACE: u8 = 4;
    pub const TYPE_AS_NUMBER: u8 = 32;
    pub const TYPE_SRLG: u8 = 34;
    pub const TYPE_PROTECTION: u8 = 37;

    pub const LOOSE_BIT: u8 = 0x80;

    pub const fn raw_type(&self) -> u8 {
        match self {
            Self::Ipv4Prefix { .. } => Self::TYPE_IPV4_PREFIX,
            Self::Ipv6Prefix { .. } => Self::TYPE_IPV6_PREFIX,
            Self::Label { .. } => Self::TYPE_LABEL,
            Self::UnnumberedInterface { .. } => Self::TYPE_UNNUMBERED_INTERFACE,
            Self::AsNumber { .. } => Self::TYPE_AS_NUMBER,
            Self::Srlg { .. } => Self::TYPE_SRLG,
            Self::Protection { .. } => Self::TYPE_PROTECTION,
        }
    }

    pub const fn loose(&self) -> bool {
        match self {
            Self::Ipv4Prefix { loose, .. }
            | Self::Ipv6Prefix { loose, .. }
            | Self::Label { loose, .. }
            | Self::UnnumberedInterface { loose, .. }
            | Self::AsNumber { loose, .. }
            | Self::Srlg { loose, .. }
            | Self::Protection { loose, .. } => *loose,
        }
    }
}
