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

//! Deserializer for the BGP-LS attribute. The object kind carried in the
//! accompanying NLRI selects the TLV table; a TLV whose code the selected
//! table doesn't know is logged and skipped rather than failing the
//! attribute.

use crate::{
    bgp_ls::{
        BgpLsPeerSid, IgpFlags, LanAdjacencyNeighbor, LinkAttributes, LinkProtection,
        LinkStateAttribute, MplsProtocolMask, MultiTopologyId, MultiTopologyIdData, NodeAttributes,
        NodeFlags, ObjectKind, PrefixAttributes, SharedRiskLinkGroupValue, SidValue,
        SrAdjacencySid, SrLanAdjacencySid,
    },
    iana::{
        BgpLsLinkAttributeType, BgpLsNodeAttributeType, BgpLsPrefixAttributeType, IgpFlagsBits,
        LinkProtectionTypeBits, MplsProtocolMaskBits, NodeFlagsBits,
    },
    wire::deserializer::{
        nlri::MplsLabelParsingError,
        read_tlv_header_t16_l16,
        rsvp_te::{RsvpTeObjectRegistry, TeLspAttributesParsingError},
    },
};
use log::debug;
use netgauze_parse_utils::{
    parse_into_located, parse_into_located_one_input, parse_till_empty_into_located,
    ErrorKindSerdeDeref, ReadablePdu, ReadablePduWithOneInput, ReadablePduWithTwoInputs, Span,
};
use netgauze_serde_macros::LocatedError;
use nom::{
    error::{ErrorKind, FromExternalError},
    number::complete::{be_f32, be_u128, be_u16, be_u32, be_u64, be_u8},
    IResult,
};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    ops::BitAnd,
    string::FromUtf8Error,
};

/// IPv4 address wire size, used to disambiguate address TLVs by length
pub const IPV4_LEN: u16 = 4;
/// IPv6 address wire size
pub const IPV6_LEN: u16 = 16;

#[derive(LocatedError, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum LinkStateAttributeParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    #[serde(with = "ErrorKindSerdeDeref")]
    NomError(#[from_nom] ErrorKind),
    Utf8Error(String),
    WrongIpAddrLength(usize),
    BadUnreservedBandwidthLength(usize),
    /// the value length fits neither the label nor the index flavor
    BadSidValueLength(u16),
    MplsLabelError(
        #[from_located(module = "crate::wire::deserializer::nlri")] MplsLabelParsingError,
    ),
    TeLspError(
        #[from_located(module = "crate::wire::deserializer::rsvp_te")] TeLspAttributesParsingError,
    ),
}

impl<'a> FromExternalError<Span<'a>, FromUtf8Error> for LocatedLinkStateAttributeParsingError<'a> {
    fn from_external_error(input: Span<'a>, _kind: ErrorKind, error: FromUtf8Error) -> Self {
        LocatedLinkStateAttributeParsingError::new(
            input,
            LinkStateAttributeParsingError::Utf8Error(error.to_string()),
        )
    }
}

impl<'a, 'r> ReadablePduWithTwoInputs<'a, ObjectKind, &'r RsvpTeObjectRegistry, LocatedLinkStateAttributeParsingError<'a>>
    for LinkStateAttribute
{
    fn from_wire(
        buf: Span<'a>,
        kind: ObjectKind,
        registry: &'r RsvpTeObjectRegistry,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        match kind {
            ObjectKind::Link => {
                let (buf, link) = parse_link_attributes(buf)?;
                Ok((buf, LinkStateAttribute::Link(link)))
            }
            ObjectKind::Node => {
                let (buf, node) = parse_node_attributes(buf)?;
                Ok((buf, LinkStateAttribute::Node(node)))
            }
            ObjectKind::Prefix => {
                let (buf, prefix) = parse_prefix_attributes(buf)?;
                Ok((buf, LinkStateAttribute::Prefix(prefix)))
            }
            ObjectKind::TeLsp => {
                let (buf, te_lsp) = parse_into_located_one_input(buf, registry)?;
                Ok((buf, LinkStateAttribute::TeLsp(te_lsp)))
            }
        }
    }
}

fn parse_link_attributes(
    buf: Span<'_>,
) -> IResult<Span<'_>, LinkAttributes, LocatedLinkStateAttributeParsingError<'_>> {
    let mut buf = buf;
    let mut link = LinkAttributes::default();
    while !buf.is_empty() {
        let (code, tlv_length, data, remainder) = read_tlv_header_t16_l16(buf)?;
        let code = match BgpLsLinkAttributeType::try_from(code) {
            Ok(code) => code,
            Err(error) => {
                debug!("skipping link attribute TLV: {error:?}");
                buf = remainder;
                continue;
            }
        };
        match code {
            BgpLsLinkAttributeType::MultiTopologyIdentifier => {
                let (_, mtid) = parse_into_located::<
                    LocatedLinkStateAttributeParsingError<'_>,
                    LocatedLinkStateAttributeParsingError<'_>,
                    MultiTopologyIdData,
                >(data)?;
                link.multi_topology_ids = Some(mtid);
            }
            BgpLsLinkAttributeType::LocalNodeIpv4RouterId => {
                let (_, address) = be_u32(data)?;
                link.local_ipv4_router_id = Some(Ipv4Addr::from(address));
            }
            BgpLsLinkAttributeType::LocalNodeIpv6RouterId => {
                let (_, address) = be_u128(data)?;
                link.local_ipv6_router_id = Some(Ipv6Addr::from(address));
            }
            BgpLsLinkAttributeType::RemoteNodeIpv4RouterId => {
                let (_, address) = be_u32(data)?;
                link.remote_ipv4_router_id = Some(Ipv4Addr::from(address));
            }
            BgpLsLinkAttributeType::RemoteNodeIpv6RouterId => {
                let (_, address) = be_u128(data)?;
                link.remote_ipv6_router_id = Some(Ipv6Addr::from(address));
            }
            BgpLsLinkAttributeType::AdminGroup => {
                let (_, color) = be_u32(data)?;
                link.admin_group = Some(color);
            }
            BgpLsLinkAttributeType::MaximumLinkBandwidth => {
                let (_, bandwidth) = be_f32(data)?;
                link.max_link_bandwidth = Some(bandwidth);
            }
            BgpLsLinkAttributeType::MaximumReservableLinkBandwidth => {
                let (_, bandwidth) = be_f32(data)?;
                link.max_reservable_bandwidth = Some(bandwidth);
            }
            BgpLsLinkAttributeType::UnreservedBandwidth => {
                let (_, vec) = nom::multi::count(be_f32, 8)(data)?;
                let len = vec.len();
                let value: [f32; 8] = vec.try_into().map_err(|_| {
                    nom::Err::Error(LocatedLinkStateAttributeParsingError::new(
                        data,
                        LinkStateAttributeParsingError::BadUnreservedBandwidthLength(len),
                    ))
                })?;
                link.unreserved_bandwidth = Some(value);
            }
            BgpLsLinkAttributeType::TeDefaultMetric => {
                let (_, metric) = be_u32(data)?;
                link.te_default_metric = Some(metric);
            }
            BgpLsLinkAttributeType::LinkProtectionType => {
                // capability octet followed by a reserved octet
                let (_, flags) = be_u8(data)?;
                link.link_protection = Some(LinkProtection {
                    extra_traffic: flags.bitand(LinkProtectionTypeBits::ExtraTraffic as u8)
                        == LinkProtectionTypeBits::ExtraTraffic as u8,
                    unprotected: flags.bitand(LinkProtectionTypeBits::Unprotected as u8)
                        == LinkProtectionTypeBits::Unprotected as u8,
                    shared: flags.bitand(LinkProtectionTypeBits::Shared as u8)
                        == LinkProtectionTypeBits::Shared as u8,
                    dedicated1c1: flags.bitand(LinkProtectionTypeBits::Dedicated1c1 as u8)
                        == LinkProtectionTypeBits::Dedicated1c1 as u8,
                    dedicated1p1: flags.bitand(LinkProtectionTypeBits::Dedicated1p1 as u8)
                        == LinkProtectionTypeBits::Dedicated1p1 as u8,
                    enhanced: flags.bitand(LinkProtectionTypeBits::Enhanced as u8)
                        == LinkProtectionTypeBits::Enhanced as u8,
                });
            }
            BgpLsLinkAttributeType::MplsProtocolMask => {
                let (_, flags) = be_u8(data)?;
                link.mpls_protocol_mask = Some(MplsProtocolMask {
                    ldp: flags.bitand(MplsProtocolMaskBits::LabelDistributionProtocol as u8)
                        == MplsProtocolMaskBits::LabelDistributionProtocol as u8,
                    rsvp_te: flags.bitand(MplsProtocolMaskBits::ExtensionToRsvpForLspTunnels as u8)
                        == MplsProtocolMaskBits::ExtensionToRsvpForLspTunnels as u8,
                });
            }
            BgpLsLinkAttributeType::IgpMetric => {
                link.igp_metric = Some(data.to_vec());
            }
            BgpLsLinkAttributeType::SharedRiskLinkGroup => {
                let (_, values) = parse_till_empty_into_located::<
                    LocatedLinkStateAttributeParsingError<'_>,
                    LocatedLinkStateAttributeParsingError<'_>,
                    SharedRiskLinkGroupValue,
                >(data)?;
                link.shared_risk_link_groups = Some(values);
            }
            BgpLsLinkAttributeType::OpaqueLinkAttribute => {
                link.opaque = Some(data.to_vec());
            }
            BgpLsLinkAttributeType::LinkName => {
                let (_, name) = nom::combinator::map_res(
                    nom::bytes::complete::take(tlv_length),
                    |x: Span<'_>| String::from_utf8(x.to_vec()),
                )(data)?;
                link.link_name = Some(name);
            }
            BgpLsLinkAttributeType::SrAdjacencySid => {
                let (_, value) = parse_into_located_one_input(data, tlv_length)?;
                link.sr_adjacency_sid = Some(value);
            }
            BgpLsLinkAttributeType::SrLanAdjacencySid => {
                let (_, value) = parse_into_located_one_input(data, tlv_length)?;
                link.sr_lan_adjacency_sid = Some(value);
            }
            BgpLsLinkAttributeType::PeerNodeSid => {
                let (_, value) = parse_into_located_one_input(data, tlv_length)?;
                link.peer_node_sid = Some(value);
            }
            BgpLsLinkAttributeType::PeerAdjSid => {
                let (_, value) = parse_into_located_one_input(data, tlv_length)?;
                link.peer_adj_sid = Some(value);
            }
            BgpLsLinkAttributeType::PeerSetSid => {
                let (_, value) = parse_into_located_one_input(data, tlv_length)?;
                link.peer_set_sid = Some(value);
            }
        }
        buf = remainder;
    }
    Ok((buf, link))
}

fn parse_node_attributes(
    buf: Span<'_>,
) -> IResult<Span<'_>, NodeAttributes, LocatedLinkStateAttributeParsingError<'_>> {
    let mut buf = buf;
    let mut node = NodeAttributes::default();
    while !buf.is_empty() {
        let (code, tlv_length, data, remainder) = read_tlv_header_t16_l16(buf)?;
        let code = match BgpLsNodeAttributeType::try_from(code) {
            Ok(code) => code,
            Err(error) => {
                debug!("skipping node attribute TLV: {error:?}");
                buf = remainder;
                continue;
            }
        };
        match code {
            BgpLsNodeAttributeType::MultiTopologyIdentifier => {
                let (_, mtid) = parse_into_located::<
                    LocatedLinkStateAttributeParsingError<'_>,
                    LocatedLinkStateAttributeParsingError<'_>,
                    MultiTopologyIdData,
                >(data)?;
                node.multi_topology_ids = Some(mtid);
            }
            BgpLsNodeAttributeType::NodeFlagBits => {
                let (_, flags) = be_u8(data)?;
                node.node_flags = Some(NodeFlags {
                    overload: flags.bitand(NodeFlagsBits::Overload as u8)
                        == NodeFlagsBits::Overload as u8,
                    attached: flags.bitand(NodeFlagsBits::Attached as u8)
                        == NodeFlagsBits::Attached as u8,
                    external: flags.bitand(NodeFlagsBits::External as u8)
                        == NodeFlagsBits::External as u8,
                    abr: flags.bitand(NodeFlagsBits::Abr as u8) == NodeFlagsBits::Abr as u8,
                    router: flags.bitand(NodeFlagsBits::Router as u8)
                        == NodeFlagsBits::Router as u8,
                    v6: flags.bitand(NodeFlagsBits::V6 as u8) == NodeFlagsBits::V6 as u8,
                });
            }
            BgpLsNodeAttributeType::OpaqueNodeAttribute => {
                node.opaque = Some(data.to_vec());
            }
            BgpLsNodeAttributeType::DynamicHostname => {
                let (_, name) = nom::combinator::map_res(
                    nom::bytes::complete::take(tlv_length),
                    |x: Span<'_>| String::from_utf8(x.to_vec()),
                )(data)?;
                node.dynamic_hostname = Some(name);
            }
            BgpLsNodeAttributeType::IsIsArea => {
                // repeatable, keep encounter order
                node.isis_area_ids
                    .get_or_insert_with(Vec::new)
                    .push(data.to_vec());
            }
            BgpLsNodeAttributeType::LocalNodeIpv4RouterId => {
                let (_, address) = be_u32(data)?;
                node.local_ipv4_router_id = Some(Ipv4Addr::from(address));
            }
            BgpLsNodeAttributeType::LocalNodeIpv6RouterId => {
                let (_, address) = be_u128(data)?;
                node.local_ipv6_router_id = Some(Ipv6Addr::from(address));
            }
            BgpLsNodeAttributeType::SrAlgorithm => {
                node.sr_algorithms = Some(data.to_vec());
            }
        }
        buf = remainder;
    }
    Ok((buf, node))
}

fn parse_prefix_attributes(
    buf: Span<'_>,
) -> IResult<Span<'_>, PrefixAttributes, LocatedLinkStateAttributeParsingError<'_>> {
    let mut buf = buf;
    let mut prefix = PrefixAttributes::default();
    while !buf.is_empty() {
        let (code, tlv_length, data, remainder) = read_tlv_header_t16_l16(buf)?;
        let code = match BgpLsPrefixAttributeType::try_from(code) {
            Ok(code) => code,
            Err(error) => {
                debug!("skipping prefix attribute TLV: {error:?}");
                buf = remainder;
                continue;
            }
        };
        match code {
            BgpLsPrefixAttributeType::IgpFlags => {
                let (_, flags) = be_u8(data)?;
                prefix.igp_flags = Some(IgpFlags {
                    isis_up_down: flags.bitand(IgpFlagsBits::IsIsUpDown as u8)
                        == IgpFlagsBits::IsIsUpDown as u8,
                    ospf_no_unicast: flags.bitand(IgpFlagsBits::OspfNoUnicast as u8)
                        == IgpFlagsBits::OspfNoUnicast as u8,
                    ospf_local_address: flags.bitand(IgpFlagsBits::OspfLocalAddress as u8)
                        == IgpFlagsBits::OspfLocalAddress as u8,
                    ospf_propagate_nssa: flags.bitand(IgpFlagsBits::OspfPropagateNssa as u8)
                        == IgpFlagsBits::OspfPropagateNssa as u8,
                });
            }
            BgpLsPrefixAttributeType::IgpRouteTag => {
                let (_, tags) = parse_till_empty_into_located::<
                    LocatedLinkStateAttributeParsingError<'_>,
                    LocatedLinkStateAttributeParsingError<'_>,
                    u32,
                >(data)?;
                prefix.route_tags = Some(tags);
            }
            BgpLsPrefixAttributeType::IgpExtendedRouteTag => {
                let (_, tags) = parse_till_empty_into_located::<
                    LocatedLinkStateAttributeParsingError<'_>,
                    LocatedLinkStateAttributeParsingError<'_>,
                    u64,
                >(data)?;
                prefix.extended_route_tags = Some(tags);
            }
            BgpLsPrefixAttributeType::PrefixMetric => {
                let (_, metric) = be_u32(data)?;
                prefix.prefix_metric = Some(metric);
            }
            BgpLsPrefixAttributeType::OspfForwardingAddress => {
                let address = if tlv_length == IPV4_LEN {
                    let (_, ip) = be_u32(data)?;
                    IpAddr::V4(Ipv4Addr::from(ip))
                } else if tlv_length == IPV6_LEN {
                    let (_, ip) = be_u128(data)?;
                    IpAddr::V6(Ipv6Addr::from(ip))
                } else {
                    return Err(nom::Err::Error(LocatedLinkStateAttributeParsingError::new(
                        data,
                        LinkStateAttributeParsingError::WrongIpAddrLength(tlv_length.into()),
                    )));
                };
                prefix.forwarding_address = Some(address);
            }
            BgpLsPrefixAttributeType::OpaquePrefixAttribute => {
                prefix.opaque = Some(data.to_vec());
            }
        }
        buf = remainder;
    }
    Ok((buf, prefix))
}

impl<'a> ReadablePdu<'a, LocatedLinkStateAttributeParsingError<'a>> for u32 {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        be_u32(buf)
    }
}

impl<'a> ReadablePdu<'a, LocatedLinkStateAttributeParsingError<'a>> for u64 {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        be_u64(buf)
    }
}

impl<'a> ReadablePdu<'a, LocatedLinkStateAttributeParsingError<'a>> for SharedRiskLinkGroupValue {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        let (span, value) = be_u32(buf)?;
        Ok((span, SharedRiskLinkGroupValue(value)))
    }
}

impl<'a> ReadablePdu<'a, LocatedLinkStateAttributeParsingError<'a>> for MultiTopologyIdData {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        let (span, value) = parse_till_empty_into_located::<
            LocatedLinkStateAttributeParsingError<'_>,
            LocatedLinkStateAttributeParsingError<'_>,
            MultiTopologyId,
        >(buf)?;
        Ok((span, MultiTopologyIdData(value)))
    }
}

impl<'a> ReadablePdu<'a, LocatedLinkStateAttributeParsingError<'a>> for MultiTopologyId {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        let (buf, mtid) = be_u16(buf)?;
        Ok((buf, MultiTopologyId::from(mtid)))
    }
}

/// Adjacency-SID value length picks the SID flavor: 7 octets carry a label,
/// 8 an index
pub(crate) const SID_VALUE_LABEL_LEN: u16 = 3;
pub(crate) const SID_VALUE_INDEX_LEN: u16 = 4;
const SID_HEADER_LEN: u16 = 4;

fn parse_sid_value(
    buf: Span<'_>,
    value_length: u16,
) -> IResult<Span<'_>, SidValue, LocatedLinkStateAttributeParsingError<'_>> {
    if value_length == SID_VALUE_LABEL_LEN {
        let (buf, label) = parse_into_located(buf)?;
        Ok((buf, SidValue::Label(label)))
    } else if value_length == SID_VALUE_INDEX_LEN {
        let (buf, index) = be_u32(buf)?;
        Ok((buf, SidValue::Index(index)))
    } else {
        Err(nom::Err::Error(LocatedLinkStateAttributeParsingError::new(
            buf,
            LinkStateAttributeParsingError::BadSidValueLength(value_length),
        )))
    }
}

impl<'a> ReadablePduWithOneInput<'a, u16, LocatedLinkStateAttributeParsingError<'a>>
    for SrAdjacencySid
{
    fn from_wire(
        buf: Span<'a>,
        length: u16,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        let (span, flags) = be_u8(buf)?;
        let (span, weight) = be_u8(span)?;
        let (span, _reserved) = be_u16(span)?;
        let (span, sid) = parse_sid_value(span, length.saturating_sub(SID_HEADER_LEN))?;
        Ok((span, SrAdjacencySid { flags, weight, sid }))
    }
}

impl<'a> ReadablePduWithOneInput<'a, u16, LocatedLinkStateAttributeParsingError<'a>>
    for SrLanAdjacencySid
{
    fn from_wire(
        buf: Span<'a>,
        length: u16,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        let (span, flags) = be_u8(buf)?;
        let (span, weight) = be_u8(span)?;
        let (span, _reserved) = be_u16(span)?;
        // the neighbor discriminator is 6 octets for IS-IS, 4 for OSPF; with
        // the SID taking 3 or 4, the four legal value lengths are 11-14
        let (span, neighbor, sid_length) = match length.saturating_sub(SID_HEADER_LEN) {
            7 => {
                let (span, ip) = be_u32(span)?;
                (
                    span,
                    LanAdjacencyNeighbor::OspfNeighborId(Ipv4Addr::from(ip)),
                    SID_VALUE_LABEL_LEN,
                )
            }
            8 => {
                let (span, ip) = be_u32(span)?;
                (
                    span,
                    LanAdjacencyNeighbor::OspfNeighborId(Ipv4Addr::from(ip)),
                    SID_VALUE_INDEX_LEN,
                )
            }
            9 => {
                let (span, system_id) = nom::bytes::complete::take(6usize)(span)?;
                let mut id = [0u8; 6];
                id.copy_from_slice(system_id.fragment());
                (
                    span,
                    LanAdjacencyNeighbor::IsIsSystemId(id),
                    SID_VALUE_LABEL_LEN,
                )
            }
            10 => {
                let (span, system_id) = nom::bytes::complete::take(6usize)(span)?;
                let mut id = [0u8; 6];
                id.copy_from_slice(system_id.fragment());
                (
                    span,
                    LanAdjacencyNeighbor::IsIsSystemId(id),
                    SID_VALUE_INDEX_LEN,
                )
            }
            other => {
                return Err(nom::Err::Error(LocatedLinkStateAttributeParsingError::new(
                    buf,
                    LinkStateAttributeParsingError::BadSidValueLength(other),
                )))
            }
        };
        let (span, sid) = parse_sid_value(span, sid_length)?;
        Ok((
            span,
            SrLanAdjacencySid {
                flags,
                weight,
                neighbor,
                sid,
            },
        ))
    }
}

impl<'a> ReadablePduWithOneInput<'a, u16, LocatedLinkStateAttributeParsingError<'a>>
    for BgpLsPeerSid
{
    fn from_wire(
        buf: Span<'a>,
        length: u16,
    ) -> IResult<Span<'a>, Self, LocatedLinkStateAttributeParsingError<'a>> {
        let (span, flags) = be_u8(buf)?;
        let (span, weight) = be_u8(span)?;
        let (span, _reserved) = be_u16(span)?;
        let (span, sid) = parse_sid_value(span, length.saturating_sub(SID_HEADER_LEN))?;
        Ok((span, BgpLsPeerSid { flags, weight, sid }))
    }
}
