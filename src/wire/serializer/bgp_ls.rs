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

//! Serializer for the BGP-LS attribute. TLVs are emitted in ascending code
//! order, so a decode/encode cycle of a canonically ordered attribute is
//! byte-identical.

use crate::{
    bgp_ls::{
        BgpLsPeerSid, LanAdjacencyNeighbor, LinkAttributes, LinkStateAttribute,
        MultiTopologyIdData, NodeAttributes, PrefixAttributes, SidValue, SrAdjacencySid,
        SrLanAdjacencySid,
    },
    iana::{
        BgpLsLinkAttributeType, BgpLsNodeAttributeType, BgpLsPrefixAttributeType, IgpFlagsBits,
        LinkProtectionTypeBits, MplsProtocolMaskBits, NodeFlagsBits,
    },
    wire::serializer::{
        nlri::MplsLabelWritingError, rsvp_te::RsvpTeWritingError, write_tlv_header_t16_l16,
    },
};
use byteorder::{NetworkEndian, WriteBytesExt};
use netgauze_parse_utils::WritablePdu;
use netgauze_serde_macros::WritingError;
use std::{io::Write, net::IpAddr};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum LinkStateAttributeWritingError {
    StdIOError(#[from_std_io_error] String),
    MplsLabelError(#[from] MplsLabelWritingError),
    RsvpTeError(#[from] RsvpTeWritingError),
}

/// TLV header length shared by every BGP-LS attribute TLV
const TLV_HEADER_LEN: usize = 4;

impl WritablePdu<LinkStateAttributeWritingError> for LinkStateAttribute {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        match self {
            Self::Link(link) => link.len(),
            Self::Node(node) => node.len(),
            Self::Prefix(prefix) => prefix.len(),
            Self::TeLsp(te_lsp) => te_lsp.len(),
        }
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), LinkStateAttributeWritingError> {
        match self {
            Self::Link(link) => link.write(writer),
            Self::Node(node) => node.write(writer),
            Self::Prefix(prefix) => prefix.write(writer),
            Self::TeLsp(te_lsp) => {
                te_lsp.write(writer)?;
                Ok(())
            }
        }
    }
}

const fn sid_value_len(sid: &SidValue) -> usize {
    match sid {
        SidValue::Label(_) => 3,
        SidValue::Index(_) => 4,
    }
}

fn write_sid_value<T: Write>(
    writer: &mut T,
    sid: &SidValue,
) -> Result<(), LinkStateAttributeWritingError> {
    match sid {
        SidValue::Label(label) => label.write(writer)?,
        SidValue::Index(index) => writer.write_u32::<NetworkEndian>(*index)?,
    }
    Ok(())
}

const fn adjacency_sid_value_len(sid: &SrAdjacencySid) -> usize {
    4 + sid_value_len(&sid.sid)
}

const fn lan_adjacency_sid_value_len(sid: &SrLanAdjacencySid) -> usize {
    let neighbor_len = match sid.neighbor {
        LanAdjacencyNeighbor::IsIsSystemId(_) => 6,
        LanAdjacencyNeighbor::OspfNeighborId(_) => 4,
    };
    4 + neighbor_len + sid_value_len(&sid.sid)
}

const fn peer_sid_value_len(sid: &BgpLsPeerSid) -> usize {
    4 + sid_value_len(&sid.sid)
}

fn write_multi_topology_tlv<T: Write>(
    writer: &mut T,
    code: u16,
    mtids: &MultiTopologyIdData,
) -> Result<(), LinkStateAttributeWritingError> {
    write_tlv_header_t16_l16(writer, code, (TLV_HEADER_LEN + 2 * mtids.id_count()) as u16)?;
    for mtid in &mtids.0 {
        writer.write_u16::<NetworkEndian>(mtid.value())?;
    }
    Ok(())
}

impl WritablePdu<LinkStateAttributeWritingError> for LinkAttributes {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        let mut len = 0;
        if let Some(mtids) = &self.multi_topology_ids {
            len += TLV_HEADER_LEN + 2 * mtids.id_count();
        }
        if self.local_ipv4_router_id.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.local_ipv6_router_id.is_some() {
            len += TLV_HEADER_LEN + 16;
        }
        if self.remote_ipv4_router_id.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.remote_ipv6_router_id.is_some() {
            len += TLV_HEADER_LEN + 16;
        }
        if self.admin_group.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.max_link_bandwidth.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.max_reservable_bandwidth.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.unreserved_bandwidth.is_some() {
            len += TLV_HEADER_LEN + 4 * 8;
        }
        if self.te_default_metric.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.link_protection.is_some() {
            len += TLV_HEADER_LEN + 2;
        }
        if self.mpls_protocol_mask.is_some() {
            len += TLV_HEADER_LEN + 1;
        }
        if let Some(metric) = &self.igp_metric {
            len += TLV_HEADER_LEN + metric.len();
        }
        if let Some(groups) = &self.shared_risk_link_groups {
            len += TLV_HEADER_LEN + 4 * groups.len();
        }
        if let Some(opaque) = &self.opaque {
            len += TLV_HEADER_LEN + opaque.len();
        }
        if let Some(name) = &self.link_name {
            len += TLV_HEADER_LEN + name.len();
        }
        if let Some(sid) = &self.sr_adjacency_sid {
            len += TLV_HEADER_LEN + adjacency_sid_value_len(sid);
        }
        if let Some(sid) = &self.sr_lan_adjacency_sid {
            len += TLV_HEADER_LEN + lan_adjacency_sid_value_len(sid);
        }
        if let Some(sid) = &self.peer_node_sid {
            len += TLV_HEADER_LEN + peer_sid_value_len(sid);
        }
        if let Some(sid) = &self.peer_adj_sid {
            len += TLV_HEADER_LEN + peer_sid_value_len(sid);
        }
        if let Some(sid) = &self.peer_set_sid {
            len += TLV_HEADER_LEN + peer_sid_value_len(sid);
        }
        len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), LinkStateAttributeWritingError> {
        if let Some(mtids) = &self.multi_topology_ids {
            write_multi_topology_tlv(
                writer,
                BgpLsLinkAttributeType::MultiTopologyIdentifier as u16,
                mtids,
            )?;
        }
        if let Some(address) = &self.local_ipv4_router_id {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::LocalNodeIpv4RouterId as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_all(&address.octets())?;
        }
        if let Some(address) = &self.local_ipv6_router_id {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::LocalNodeIpv6RouterId as u16,
                (TLV_HEADER_LEN + 16) as u16,
            )?;
            writer.write_all(&address.octets())?;
        }
        if let Some(address) = &self.remote_ipv4_router_id {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::RemoteNodeIpv4RouterId as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_all(&address.octets())?;
        }
        if let Some(address) = &self.remote_ipv6_router_id {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::RemoteNodeIpv6RouterId as u16,
                (TLV_HEADER_LEN + 16) as u16,
            )?;
            writer.write_all(&address.octets())?;
        }
        if let Some(color) = &self.admin_group {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::AdminGroup as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_u32::<NetworkEndian>(*color)?;
        }
        if let Some(bandwidth) = &self.max_link_bandwidth {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::MaximumLinkBandwidth as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_f32::<NetworkEndian>(*bandwidth)?;
        }
        if let Some(bandwidth) = &self.max_reservable_bandwidth {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::MaximumReservableLinkBandwidth as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_f32::<NetworkEndian>(*bandwidth)?;
        }
        if let Some(bandwidths) = &self.unreserved_bandwidth {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::UnreservedBandwidth as u16,
                (TLV_HEADER_LEN + 4 * 8) as u16,
            )?;
            for bandwidth in bandwidths {
                writer.write_f32::<NetworkEndian>(*bandwidth)?;
            }
        }
        if let Some(metric) = &self.te_default_metric {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::TeDefaultMetric as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_u32::<NetworkEndian>(*metric)?;
        }
        if let Some(protection) = &self.link_protection {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::LinkProtectionType as u16,
                (TLV_HEADER_LEN + 2) as u16,
            )?;
            let mut protection_cap = 0;
            if protection.extra_traffic {
                protection_cap |= LinkProtectionTypeBits::ExtraTraffic as u8;
            }
            if protection.unprotected {
                protection_cap |= LinkProtectionTypeBits::Unprotected as u8;
            }
            if protection.shared {
                protection_cap |= LinkProtectionTypeBits::Shared as u8;
            }
            if protection.dedicated1c1 {
                protection_cap |= LinkProtectionTypeBits::Dedicated1c1 as u8;
            }
            if protection.dedicated1p1 {
                protection_cap |= LinkProtectionTypeBits::Dedicated1p1 as u8;
            }
            if protection.enhanced {
                protection_cap |= LinkProtectionTypeBits::Enhanced as u8;
            }
            writer.write_u8(protection_cap)?;
            // reserved octet
            writer.write_u8(0)?;
        }
        if let Some(mask) = &self.mpls_protocol_mask {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::MplsProtocolMask as u16,
                (TLV_HEADER_LEN + 1) as u16,
            )?;
            let mut flags = 0;
            if mask.ldp {
                flags |= MplsProtocolMaskBits::LabelDistributionProtocol as u8;
            }
            if mask.rsvp_te {
                flags |= MplsProtocolMaskBits::ExtensionToRsvpForLspTunnels as u8;
            }
            writer.write_u8(flags)?;
        }
        if let Some(metric) = &self.igp_metric {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::IgpMetric as u16,
                (TLV_HEADER_LEN + metric.len()) as u16,
            )?;
            writer.write_all(metric)?;
        }
        if let Some(groups) = &self.shared_risk_link_groups {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::SharedRiskLinkGroup as u16,
                (TLV_HEADER_LEN + 4 * groups.len()) as u16,
            )?;
            for group in groups {
                writer.write_u32::<NetworkEndian>(group.value())?;
            }
        }
        if let Some(opaque) = &self.opaque {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::OpaqueLinkAttribute as u16,
                (TLV_HEADER_LEN + opaque.len()) as u16,
            )?;
            writer.write_all(opaque)?;
        }
        if let Some(name) = &self.link_name {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::LinkName as u16,
                (TLV_HEADER_LEN + name.len()) as u16,
            )?;
            writer.write_all(name.as_bytes())?;
        }
        if let Some(sid) = &self.sr_adjacency_sid {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::SrAdjacencySid as u16,
                (TLV_HEADER_LEN + adjacency_sid_value_len(sid)) as u16,
            )?;
            writer.write_u8(sid.flags)?;
            writer.write_u8(sid.weight)?;
            writer.write_u16::<NetworkEndian>(0)?;
            write_sid_value(writer, &sid.sid)?;
        }
        if let Some(sid) = &self.sr_lan_adjacency_sid {
            write_tlv_header_t16_l16(
                writer,
                BgpLsLinkAttributeType::SrLanAdjacencySid as u16,
                (TLV_HEADER_LEN + lan_adjacency_sid_value_len(sid)) as u16,
            )?;
            writer.write_u8(sid.flags)?;
            writer.write_u8(sid.weight)?;
            writer.write_u16::<NetworkEndian>(0)?;
            match &sid.neighbor {
                LanAdjacencyNeighbor::IsIsSystemId(system_id) => writer.write_all(system_id)?,
                LanAdjacencyNeighbor::OspfNeighborId(address) => {
                    writer.write_all(&address.octets())?
                }
            }
            write_sid_value(writer, &sid.sid)?;
        }
        for (code, sid) in [
            (BgpLsLinkAttributeType::PeerNodeSid, &self.peer_node_sid),
            (BgpLsLinkAttributeType::PeerAdjSid, &self.peer_adj_sid),
            (BgpLsLinkAttributeType::PeerSetSid, &self.peer_set_sid),
        ] {
            if let Some(sid) = sid {
                write_tlv_header_t16_l16(
                    writer,
                    code as u16,
                    (TLV_HEADER_LEN + peer_sid_value_len(sid)) as u16,
                )?;
                writer.write_u8(sid.flags)?;
                writer.write_u8(sid.weight)?;
                writer.write_u16::<NetworkEndian>(0)?;
                write_sid_value(writer, &sid.sid)?;
            }
        }
        Ok(())
    }
}

impl WritablePdu<LinkStateAttributeWritingError> for NodeAttributes {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        let mut len = 0;
        if let Some(mtids) = &self.multi_topology_ids {
            len += TLV_HEADER_LEN + 2 * mtids.id_count();
        }
        if self.node_flags.is_some() {
            len += TLV_HEADER_LEN + 1;
        }
        if let Some(opaque) = &self.opaque {
            len += TLV_HEADER_LEN + opaque.len();
        }
        if let Some(name) = &self.dynamic_hostname {
            len += TLV_HEADER_LEN + name.len();
        }
        if let Some(areas) = &self.isis_area_ids {
            for area in areas {
                len += TLV_HEADER_LEN + area.len();
            }
        }
        if self.local_ipv4_router_id.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if self.local_ipv6_router_id.is_some() {
            len += TLV_HEADER_LEN + 16;
        }
        if let Some(algorithms) = &self.sr_algorithms {
            len += TLV_HEADER_LEN + algorithms.len();
        }
        len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), LinkStateAttributeWritingError> {
        if let Some(mtids) = &self.multi_topology_ids {
            write_multi_topology_tlv(
                writer,
                BgpLsNodeAttributeType::MultiTopologyIdentifier as u16,
                mtids,
            )?;
        }
        if let Some(node_flags) = &self.node_flags {
            write_tlv_header_t16_l16(
                writer,
                BgpLsNodeAttributeType::NodeFlagBits as u16,
                (TLV_HEADER_LEN + 1) as u16,
            )?;
            let mut flags = 0;
            if node_flags.overload {
                flags |= NodeFlagsBits::Overload as u8;
            }
            if node_flags.attached {
                flags |= NodeFlagsBits::Attached as u8;
            }
            if node_flags.external {
                flags |= NodeFlagsBits::External as u8;
            }
            if node_flags.abr {
                flags |= NodeFlagsBits::Abr as u8;
            }
            if node_flags.router {
                flags |= NodeFlagsBits::Router as u8;
            }
            if node_flags.v6 {
                flags |= NodeFlagsBits::V6 as u8;
            }
            writer.write_u8(flags)?;
        }
        if let Some(opaque) = &self.opaque {
            write_tlv_header_t16_l16(
                writer,
                BgpLsNodeAttributeType::OpaqueNodeAttribute as u16,
                (TLV_HEADER_LEN + opaque.len()) as u16,
            )?;
            writer.write_all(opaque)?;
        }
        if let Some(name) = &self.dynamic_hostname {
            write_tlv_header_t16_l16(
                writer,
                BgpLsNodeAttributeType::DynamicHostname as u16,
                (TLV_HEADER_LEN + name.len()) as u16,
            )?;
            writer.write_all(name.as_bytes())?;
        }
        if let Some(areas) = &self.isis_area_ids {
            for area in areas {
                write_tlv_header_t16_l16(
                    writer,
                    BgpLsNodeAttributeType::IsIsArea as u16,
                    (TLV_HEADER_LEN + area.len()) as u16,
                )?;
                writer.write_all(area)?;
            }
        }
        if let Some(address) = &self.local_ipv4_router_id {
            write_tlv_header_t16_l16(
                writer,
                BgpLsNodeAttributeType::LocalNodeIpv4RouterId as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_all(&address.octets())?;
        }
        if let Some(address) = &self.local_ipv6_router_id {
            write_tlv_header_t16_l16(
                writer,
                BgpLsNodeAttributeType::LocalNodeIpv6RouterId as u16,
                (TLV_HEADER_LEN + 16) as u16,
            )?;
            writer.write_all(&address.octets())?;
        }
        if let Some(algorithms) = &self.sr_algorithms {
            write_tlv_header_t16_l16(
                writer,
                BgpLsNodeAttributeType::SrAlgorithm as u16,
                (TLV_HEADER_LEN + algorithms.len()) as u16,
            )?;
            writer.write_all(algorithms)?;
        }
        Ok(())
    }
}

impl WritablePdu<LinkStateAttributeWritingError> for PrefixAttributes {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        let mut len = 0;
        if self.igp_flags.is_some() {
            len += TLV_HEADER_LEN + 1;
        }
        if let Some(tags) = &self.route_tags {
            len += TLV_HEADER_LEN + 4 * tags.len();
        }
        if let Some(tags) = &self.extended_route_tags {
            len += TLV_HEADER_LEN + 8 * tags.len();
        }
        if self.prefix_metric.is_some() {
            len += TLV_HEADER_LEN + 4;
        }
        if let Some(address) = &self.forwarding_address {
            len += TLV_HEADER_LEN
                + match address {
                    IpAddr::V4(_) => 4,
                    IpAddr::V6(_) => 16,
                };
        }
        if let Some(opaque) = &self.opaque {
            len += TLV_HEADER_LEN + opaque.len();
        }
        len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), LinkStateAttributeWritingError> {
        if let Some(igp_flags) = &self.igp_flags {
            write_tlv_header_t16_l16(
                writer,
                BgpLsPrefixAttributeType::IgpFlags as u16,
                (TLV_HEADER_LEN + 1) as u16,
            )?;
            let mut flags = 0;
            if igp_flags.isis_up_down {
                flags |= IgpFlagsBits::IsIsUpDown as u8;
            }
            if igp_flags.ospf_no_unicast {
                flags |= IgpFlagsBits::OspfNoUnicast as u8;
            }
            if igp_flags.ospf_local_address {
                flags |= IgpFlagsBits::OspfLocalAddress as u8;
            }
            if igp_flags.ospf_propagate_nssa {
                flags |= IgpFlagsBits::OspfPropagateNssa as u8;
            }
            writer.write_u8(flags)?;
        }
        if let Some(tags) = &self.route_tags {
            write_tlv_header_t16_l16(
                writer,
                BgpLsPrefixAttributeType::IgpRouteTag as u16,
                (TLV_HEADER_LEN + 4 * tags.len()) as u16,
            )?;
            for tag in tags {
                writer.write_u32::<NetworkEndian>(*tag)?;
            }
        }
        if let Some(tags) = &self.extended_route_tags {
            write_tlv_header_t16_l16(
                writer,
                BgpLsPrefixAttributeType::IgpExtendedRouteTag as u16,
                (TLV_HEADER_LEN + 8 * tags.len()) as u16,
            )?;
            for tag in tags {
                writer.write_u64::<NetworkEndian>(*tag)?;
            }
        }
        if let Some(metric) = &self.prefix_metric {
            write_tlv_header_t16_l16(
                writer,
                BgpLsPrefixAttributeType::PrefixMetric as u16,
                (TLV_HEADER_LEN + 4) as u16,
            )?;
            writer.write_u32::<NetworkEndian>(*metric)?;
        }
        if let Some(address) = &self.forwarding_address {
            match address {
                IpAddr::V4(address) => {
                    write_tlv_header_t16_l16(
                        writer,
                        BgpLsPrefixAttributeType::OspfForwardingAddress as u16,
                        (TLV_HEADER_LEN + 4) as u16,
                    )?;
                    writer.write_all(&address.octets())?;
                }
                IpAddr::V6(address) => {
                    write_tlv_header_t16_l16(
                        writer,
                        BgpLsPrefixAttributeType::OspfForwardingAddress as u16,
                        (TLV_HEADER_LEN + 16) as u16,
                    )?;
                    writer.write_all(&address.octets())?;
                }
            }
        }
        if let Some(opaque) = &self.opaque {
            write_tlv_header_t16_l16(
                writer,
                BgpLsPrefixAttributeType::OpaquePrefixAttribute as u16,
                (TLV_HEADER_LEN + opaque.len()) as u16,
            )?;
            writer.write_all(opaque)?;
        }
        Ok(())
    }
}
