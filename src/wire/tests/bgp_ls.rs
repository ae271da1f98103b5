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

use crate::{
    bgp_ls::{
        IgpFlags, LanAdjacencyNeighbor, LinkAttributes, LinkProtection, LinkStateAttribute,
        MultiTopologyId, MultiTopologyIdData, NodeAttributes, NodeFlags, ObjectKind,
        PrefixAttributes, SidValue, SrAdjacencySid, SrLanAdjacencySid, BgpLsPeerSid,
    },
    nlri::MplsLabel,
    rsvp_te::{BandwidthObject, TeLspAttributes},
    wire::{
        deserializer::{
            bgp_ls::{LinkStateAttributeParsingError, LocatedLinkStateAttributeParsingError},
            rsvp_te::{default_rsvp_te_registry, RsvpTeObjectRegistry, TeLspAttributesParsingError},
        },
        serializer::bgp_ls::LinkStateAttributeWritingError,
    },
};
use netgauze_parse_utils::{
    test_helpers::{
        test_parse_error_with_two_inputs, test_parsed_completely_with_two_inputs, test_write,
    },
    Span,
};
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn test_link_attributes() -> Result<(), LinkStateAttributeWritingError> {
    let good_wire = [
        // local node IPv4 router id 10.0.0.1
        0x04, 0x04, 0x00, 0x04, 0x0a, 0x00, 0x00, 0x01,
        // maximum link bandwidth 1000.0
        0x04, 0x41, 0x00, 0x04, 0x44, 0x7a, 0x00, 0x00,
        // TE default metric 10
        0x04, 0x44, 0x00, 0x04, 0x00, 0x00, 0x00, 0x0a,
        // link protection: unprotected, reserved octet
        0x04, 0x45, 0x00, 0x02, 0x02, 0x00,
        // IGP metric (IS-IS wide)
        0x04, 0x47, 0x00, 0x03, 0x00, 0x00, 0x0a,
    ];

    let good = LinkStateAttribute::Link(LinkAttributes {
        local_ipv4_router_id: Some(Ipv4Addr::new(10, 0, 0, 1)),
        max_link_bandwidth: Some(1000.0),
        te_default_metric: Some(10),
        link_protection: Some(LinkProtection {
            unprotected: true,
            ..Default::default()
        }),
        igp_metric: Some(vec![0x00, 0x00, 0x0a]),
        ..Default::default()
    });
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_two_inputs(&good_wire, ObjectKind::Link, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_link_segment_routing_sids() -> Result<(), LinkStateAttributeWritingError> {
    let good_wire = [
        // SR adjacency SID, 3-octet label value
        0x04, 0x4b, 0x00, 0x07, 0x60, 0x00, 0x00, 0x00, 0x00, 0x06, 0x41,
        // SR LAN adjacency SID, IS-IS system-id neighbor and label value
        0x04, 0x4c, 0x00, 0x0d, 0x20, 0x01, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
        0x00, 0x06, 0x41,
        // peer node SID, 4-octet index value
        0x04, 0x4d, 0x00, 0x08, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
    ];

    let good = LinkStateAttribute::Link(LinkAttributes {
        sr_adjacency_sid: Some(SrAdjacencySid {
            flags: 0x60,
            weight: 0,
            sid: SidValue::Label(MplsLabel::new([0x00, 0x06, 0x41])),
        }),
        sr_lan_adjacency_sid: Some(SrLanAdjacencySid {
            flags: 0x20,
            weight: 1,
            neighbor: LanAdjacencyNeighbor::IsIsSystemId([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
            sid: SidValue::Label(MplsLabel::new([0x00, 0x06, 0x41])),
        }),
        peer_node_sid: Some(BgpLsPeerSid {
            flags: 0x40,
            weight: 0,
            sid: SidValue::Index(256),
        }),
        ..Default::default()
    });
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_two_inputs(&good_wire, ObjectKind::Link, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_node_attributes() -> Result<(), LinkStateAttributeWritingError> {
    let good_wire = [
        // multi-topology identifiers 2 and 5
        0x01, 0x07, 0x00, 0x04, 0x00, 0x02, 0x00, 0x05,
        // node flags: overload, attached, abr
        0x04, 0x00, 0x00, 0x01, 0xd0,
        // dynamic hostname "r1"
        0x04, 0x02, 0x00, 0x02, 0x72, 0x31,
        // two IS-IS area identifier TLVs, kept in encounter order
        0x04, 0x03, 0x00, 0x03, 0x49, 0x00, 0x01,
        0x04, 0x03, 0x00, 0x03, 0x49, 0x00, 0x02,
    ];

    let good = LinkStateAttribute::Node(NodeAttributes {
        multi_topology_ids: Some(MultiTopologyIdData(vec![
            MultiTopologyId::from(2),
            MultiTopologyId::from(5),
        ])),
        node_flags: Some(NodeFlags {
            overload: true,
            attached: true,
            abr: true,
            ..Default::default()
        }),
        dynamic_hostname: Some("r1".to_string()),
        isis_area_ids: Some(vec![vec![0x49, 0x00, 0x01], vec![0x49, 0x00, 0x02]]),
        ..Default::default()
    });
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_two_inputs(&good_wire, ObjectKind::Node, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_prefix_attributes() -> Result<(), LinkStateAttributeWritingError> {
    let good_wire = [
        // IGP flags: IS-IS up/down
        0x04, 0x80, 0x00, 0x01, 0x80,
        // IGP route tags 100 and 200
        0x04, 0x81, 0x00, 0x08, 0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00, 0xc8,
        // prefix metric 30
        0x04, 0x83, 0x00, 0x04, 0x00, 0x00, 0x00, 0x1e,
        // OSPF forwarding address 10.1.1.1
        0x04, 0x84, 0x00, 0x04, 0x0a, 0x01, 0x01, 0x01,
    ];

    let good = LinkStateAttribute::Prefix(PrefixAttributes {
        igp_flags: Some(IgpFlags {
            isis_up_down: true,
            ..Default::default()
        }),
        route_tags: Some(vec![100, 200]),
        prefix_metric: Some(30),
        forwarding_address: Some(IpAddr::V4(Ipv4Addr::new(10, 1, 1, 1))),
        ..Default::default()
    });
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_two_inputs(&good_wire, ObjectKind::Prefix, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_unknown_tlv_skipped() {
    let good_wire = [
        // TLV code 0xfffe has no entry in the node table
        0xff, 0xfe, 0x00, 0x02, 0xaa, 0xbb,
        // node flags: overload
        0x04, 0x00, 0x00, 0x01, 0x80,
    ];

    let good = LinkStateAttribute::Node(NodeAttributes {
        node_flags: Some(NodeFlags {
            overload: true,
            ..Default::default()
        }),
        ..Default::default()
    });
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_two_inputs(&good_wire, ObjectKind::Node, &registry, &good);
}

#[test]
fn test_forwarding_address_wrong_length() {
    let bad_wire = [0x04, 0x84, 0x00, 0x05, 0x0a, 0x01, 0x01, 0x01, 0x00];

    let registry = default_rsvp_te_registry();
    let bad = nom::Err::Error(LocatedLinkStateAttributeParsingError::new(
        unsafe { Span::new_from_raw_offset(4, &bad_wire[4..]) },
        LinkStateAttributeParsingError::WrongIpAddrLength(5),
    ));

    test_parse_error_with_two_inputs::<
        LinkStateAttribute,
        ObjectKind,
        &RsvpTeObjectRegistry,
        LocatedLinkStateAttributeParsingError<'_>,
    >(&bad_wire, ObjectKind::Prefix, &registry, bad);
}

#[test]
fn test_te_lsp_attribute() -> Result<(), LinkStateAttributeWritingError> {
    let good_wire = [
        // TE-LSP TLV code 99 and length
        0x00, 0x63, 0x00, 0x08,
        // bandwidth object, 20000.0
        0x00, 0x04, 0x05, 0x01, 0x46, 0x9c, 0x40, 0x00,
    ];

    let good = LinkStateAttribute::TeLsp(TeLspAttributes {
        bandwidth: Some(BandwidthObject::Basic(20000.0)),
        ..Default::default()
    });
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_two_inputs(&good_wire, ObjectKind::TeLsp, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_te_lsp_unknown_object() {
    let bad_wire = [0x00, 0x63, 0x00, 0x04, 0x00, 0x00, 0xfa, 0x01];

    let registry = default_rsvp_te_registry();
    let bad = nom::Err::Error(LocatedLinkStateAttributeParsingError::new(
        unsafe { Span::new_from_raw_offset(4, &bad_wire[4..]) },
        LinkStateAttributeParsingError::TeLspError(TeLspAttributesParsingError::UnknownObject {
            class_num: 250,
            c_type: 1,
        }),
    ));

    test_parse_error_with_two_inputs::<
        LinkStateAttribute,
        ObjectKind,
        &RsvpTeObjectRegistry,
        LocatedLinkStateAttributeParsingError<'_>,
    >(&bad_wire, ObjectKind::TeLsp, &registry, bad);
}
