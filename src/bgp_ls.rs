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

//! Data types for the BGP-LS attribute
//! ([RFC7752](https://datatracker.ietf.org/doc/html/rfc7752)), one record per
//! link-state object kind. All fields are optional: a TLV absent from the wire
//! leaves its field unset, never a sentinel value.

use crate::{nlri::MplsLabel, rsvp_te::TeLspAttributes};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ops::BitAnd;
use strum_macros::Display;

/// The link-state object kind carried by the NLRI that accompanies a BGP-LS
/// attribute. The kind selects which decoder table applies to the attribute
/// value; it is supplied by the caller, never re-derived from the attribute
/// bytes.
#[derive(Display, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    Link,
    Node,
    Prefix,
    TeLsp,
}

/// A parsed BGP-LS attribute, tagged by the object kind it was decoded for.
#[derive(Display, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LinkStateAttribute {
    Link(LinkAttributes),
    Node(NodeAttributes),
    Prefix(PrefixAttributes),
    TeLsp(TeLspAttributes),
}

impl LinkStateAttribute {
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Link(_) => ObjectKind::Link,
            Self::Node(_) => ObjectKind::Node,
            Self::Prefix(_) => ObjectKind::Prefix,
            Self::TeLsp(_) => ObjectKind::TeLsp,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MultiTopologyIdData(pub Vec<MultiTopologyId>);

impl From<Vec<MultiTopologyId>> for MultiTopologyIdData {
    fn from(value: Vec<MultiTopologyId>) -> Self {
        Self(value)
    }
}

impl MultiTopologyIdData {
    pub fn id_count(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MultiTopologyId(pub u16);

impl MultiTopologyId {
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for MultiTopologyId {
    fn from(value: u16) -> Self {
        // ignore the 4 reserved high bits
        Self(value.bitand(!(0b1111u16 << 12)))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SharedRiskLinkGroupValue(pub u32);

impl SharedRiskLinkGroupValue {
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// Node flag bits [RFC7752 Section 3.3.1.1](https://datatracker.ietf.org/doc/html/rfc7752#section-3.3.1.1)
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeFlags {
    pub overload: bool,
    pub attached: bool,
    pub external: bool,
    pub abr: bool,
    pub router: bool,
    pub v6: bool,
}

/// IGP prefix flag bits [RFC7752 Section 3.3.3.1](https://datatracker.ietf.org/doc/html/rfc7752#section-3.3.3.1)
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct IgpFlags {
    pub isis_up_down: bool,
    pub ospf_no_unicast: bool,
    pub ospf_local_address: bool,
    pub ospf_propagate_nssa: bool,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MplsProtocolMask {
    pub ldp: bool,
    pub rsvp_te: bool,
}

/// Link protection capabilities [RFC5307 Section 1.2](https://datatracker.ietf.org/doc/html/rfc5307#section-1.2)
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LinkProtection {
    pub extra_traffic: bool,
    pub unprotected: bool,
    pub shared: bool,
    pub dedicated1c1: bool,
    pub dedicated1p1: bool,
    pub enhanced: bool,
}

/// The SID carried in an Adjacency-SID or Peer-SID TLV: either a 3-octet MPLS
/// label or a 4-octet index into a label space. The wire flavor is picked by
/// the value length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SidValue {
    Label(MplsLabel),
    Index(u32),
}

/// SR Adjacency-SID TLV value
/// [RFC9085 Section 2.2.1](https://datatracker.ietf.org/doc/html/rfc9085#section-2.2.1)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SrAdjacencySid {
    pub flags: u8,
    pub weight: u8,
    pub sid: SidValue,
}

/// The neighbor discriminator inside a LAN Adjacency-SID TLV: a 6-octet
/// IS-IS system-id or the IPv4 OSPF neighbor router-id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum LanAdjacencyNeighbor {
    IsIsSystemId([u8; 6]),
    OspfNeighborId(Ipv4Addr),
}

/// SR LAN Adjacency-SID TLV value
/// [RFC9085 Section 2.2.2](https://datatracker.ietf.org/doc/html/rfc9085#section-2.2.2)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SrLanAdjacencySid {
    pub flags: u8,
    pub weight: u8,
    pub neighbor: LanAdjacencyNeighbor,
    pub sid: SidValue,
}

/// BGP Peer Node/Adj/Set SID TLV value
/// [RFC9086](https://datatracker.ietf.org/doc/html/rfc9086)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BgpLsPeerSid {
    pub flags: u8,
    pub weight: u8,
    pub sid: SidValue,
}

/// Attributes of a Link object. TLV codes 263 and 1028-1103.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAttributes {
    pub multi_topology_ids: Option<MultiTopologyIdData>,
    pub local_ipv4_router_id: Option<Ipv4Addr>,
    pub local_ipv6_router_id: Option<Ipv6Addr>,
    pub remote_ipv4_router_id: Option<Ipv4Addr>,
    pub remote_ipv6_router_id: Option<Ipv6Addr>,
    pub admin_group: Option<u32>,
    pub max_link_bandwidth: Option<f32>,
    pub max_reservable_bandwidth: Option<f32>,
    /// one entry per priority 0-7
    pub unreserved_bandwidth: Option<[f32; 8]>,
    pub te_default_metric: Option<u32>,
    pub link_protection: Option<LinkProtection>,
    pub mpls_protocol_mask: Option<MplsProtocolMask>,
    /// 1 to 3 octets depending on the originating IGP
    pub igp_metric: Option<Vec<u8>>,
    pub shared_risk_link_groups: Option<Vec<SharedRiskLinkGroupValue>>,
    pub opaque: Option<Vec<u8>>,
    pub link_name: Option<String>,
    pub sr_adjacency_sid: Option<SrAdjacencySid>,
    pub sr_lan_adjacency_sid: Option<SrLanAdjacencySid>,
    pub peer_node_sid: Option<BgpLsPeerSid>,
    pub peer_adj_sid: Option<BgpLsPeerSid>,
    pub peer_set_sid: Option<BgpLsPeerSid>,
}

/// Attributes of a Node object. TLV codes 263 and 1024-1035.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub multi_topology_ids: Option<MultiTopologyIdData>,
    pub node_flags: Option<NodeFlags>,
    pub opaque: Option<Vec<u8>>,
    pub dynamic_hostname: Option<String>,
    /// the TLV is repeatable, encounter order is kept
    pub isis_area_ids: Option<Vec<Vec<u8>>>,
    pub local_ipv4_router_id: Option<Ipv4Addr>,
    pub local_ipv6_router_id: Option<Ipv6Addr>,
    pub sr_algorithms: Option<Vec<u8>>,
}

/// Attributes of a Prefix object. TLV codes 1152-1157.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PrefixAttributes {
    pub igp_flags: Option<IgpFlags>,
    pub route_tags: Option<Vec<u32>>,
    pub extended_route_tags: Option<Vec<u64>>,
    pub prefix_metric: Option<u32>,
    pub forwarding_address: Option<IpAddr>,
    pub opaque: Option<Vec<u8>>,
}
