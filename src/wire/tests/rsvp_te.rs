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
    rsvp_te::{
        AdminStatusObject, AssociationObject, BandwidthObject, ExcludeRouteObject,
        ExplicitRouteObject, FastRerouteObject, MetricObject, ProtectionBody, ProtectionObject,
        RouteSubobject, SenderTspecObject, SessionAttributeObject, TeLspAttributes,
        TspecParameters,
    },
    wire::{
        deserializer::rsvp_te::{
            default_rsvp_te_registry, LocatedTeLspAttributesParsingError, RsvpTeObjectRegistry,
            TeLspAttributesParsingError,
        },
        serializer::rsvp_te::RsvpTeWritingError,
    },
};
use ipnet::Ipv4Net;
use netgauze_parse_utils::{
    test_helpers::{
        test_parse_error_with_one_input, test_parsed_completely_with_one_input, test_write,
    },
    Span,
};
use std::{net::Ipv4Addr, str::FromStr};

#[test]
fn test_sender_tspec() -> Result<(), RsvpTeWritingError> {
    let good_wire = [
        0x00, 0x63, 0x00, 0x24,
        // sender tspec, class 12 c-type 2
        0x00, 0x20, 0x0c, 0x02,
        // message, service, and parameter headers
        0x00, 0x00, 0x00, 0x07, 0x01, 0x00, 0x00, 0x06, 0x7f, 0x00, 0x00, 0x05,
        // token bucket rate 4096.0, size 1024.0, peak 8192.0
        0x45, 0x80, 0x00, 0x00, 0x44, 0x80, 0x00, 0x00, 0x46, 0x00, 0x00, 0x00,
        // minimum policed unit 64, maximum packet size 1500
        0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x05, 0xdc,
    ];

    let good = TeLspAttributes {
        sender_tspec: Some(SenderTspecObject(TspecParameters {
            token_bucket_rate: 4096.0,
            token_bucket_size: 1024.0,
            peak_data_rate: 8192.0,
            minimum_policed_unit: 64,
            maximum_packet_size: 1500,
        })),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_session_attribute_name_padding() -> Result<(), RsvpTeWritingError> {
    let good_wire = [
        0x00, 0x63, 0x00, 0x0c,
        // session attribute, class 207 c-type 7
        0x00, 0x08, 0xcf, 0x07,
        // priorities, flags, padded name "abc"
        0x07, 0x07, 0x00, 0x04, 0x61, 0x62, 0x63, 0x00,
    ];

    let good = TeLspAttributes {
        session_attribute: Some(SessionAttributeObject::Basic {
            setup_priority: 7,
            holding_priority: 7,
            flags: 0,
            session_name: "abc".to_string(),
        }),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_session_attribute_with_affinities() -> Result<(), RsvpTeWritingError> {
    let good_wire = [
        0x00, 0x63, 0x00, 0x18,
        // session attribute, class 207 c-type 1
        0x00, 0x14, 0xcf, 0x01,
        // exclude-any, include-any, include-all
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03,
        // priorities, flags, padded name "te-1"
        0x00, 0x07, 0x01, 0x04, 0x74, 0x65, 0x2d, 0x31,
    ];

    let good = TeLspAttributes {
        session_attribute: Some(SessionAttributeObject::WithResourceAffinities {
            exclude_any: 1,
            include_any: 2,
            include_all: 3,
            setup_priority: 0,
            holding_priority: 7,
            flags: 1,
            session_name: "te-1".to_string(),
        }),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_explicit_route() -> Result<(), RsvpTeWritingError> {
    let good_wire = [
        0x00, 0x63, 0x00, 0x10,
        // explicit route, class 20 c-type 1
        0x00, 0x0c, 0x14, 0x01,
        // loose IPv4 prefix 10.0.0.0/8
        0x81, 0x08, 0x0a, 0x00, 0x00, 0x00, 0x08, 0x00,
        // strict AS number 65000
        0x20, 0x04, 0xfd, 0xe8,
    ];

    let good = TeLspAttributes {
        explicit_route: Some(ExplicitRouteObject {
            subobjects: vec![
                RouteSubobject::Ipv4Prefix {
                    loose: true,
                    prefix: Ipv4Net::from_str("10.0.0.0/8").unwrap(),
                    attributes: 0,
                },
                RouteSubobject::AsNumber {
                    loose: false,
                    asn: 65000,
                },
            ],
        }),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_exclude_route_srlg() -> Result<(), RsvpTeWritingError> {
    let good_wire = [
        0x00, 0x63, 0x00, 0x0c,
        // exclude route, class 232 c-type 1
        0x00, 0x08, 0xe8, 0x01,
        // SRLG id 0x12345678 with attribute octet 2 after the reserved byte
        0xa2, 0x08, 0x12, 0x34, 0x56, 0x78, 0x00, 0x02,
    ];

    let good = TeLspAttributes {
        exclude_route: Some(ExcludeRouteObject {
            subobjects: vec![RouteSubobject::Srlg {
                loose: true,
                srlg_id: 0x1234_5678,
                attributes: 2,
            }],
        }),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_protection_association_status_metric() -> Result<(), RsvpTeWritingError> {
    let good_wire = [
        0x00, 0x63, 0x00, 0x44,
        // fast reroute, class 205 c-type 1
        0x00, 0x14, 0xcd, 0x01, 0x07, 0x00, 0x0a, 0x01, 0x45, 0x80, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03,
        // protection, class 37 c-type 2
        0x00, 0x08, 0x25, 0x02, 0xc0, 0x01, 0x00, 0x02, 0x80, 0x03, 0x00, 0x00,
        // association, class 199 c-type 1
        0x00, 0x08, 0xc7, 0x01, 0x00, 0x01, 0x00, 0x2a, 0x0a, 0x00, 0x00, 0x01,
        // admin status, class 196 c-type 1
        0x00, 0x04, 0xc4, 0x01, 0x80, 0x00, 0x00, 0x03,
        // metric, class 6 c-type 1
        0x00, 0x08, 0x06, 0x01, 0x00, 0x00, 0x03, 0x02, 0x00, 0x00, 0x00, 0x64,
    ];

    let good = TeLspAttributes {
        fast_reroute: Some(FastRerouteObject::Type1 {
            setup_priority: 7,
            holding_priority: 0,
            hop_limit: 10,
            flags: 1,
            bandwidth: 4096.0,
            include_any: 1,
            exclude_any: 2,
            include_all: 3,
        }),
        protection: Some(ProtectionObject {
            body: ProtectionBody::Type2 {
                secondary: true,
                protecting: true,
                notification: false,
                operational: false,
                lsp_flags: 1,
                link_flags: 2,
                in_place: true,
                required: false,
                seg_flags: 3,
            },
        }),
        association: Some(AssociationObject::Ipv4 {
            association_type: 1,
            association_id: 42,
            source: Ipv4Addr::new(10, 0, 0, 1),
        }),
        admin_status: Some(AdminStatusObject {
            reflect: true,
            testing: false,
            administratively_down: true,
            deleting: true,
        }),
        metric: Some(MetricObject {
            bound: true,
            computed: true,
            metric_type: 2,
            value: 100,
        }),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_repeated_object_last_wins() {
    let good_wire = [
        0x00, 0x63, 0x00, 0x10,
        // bandwidth 100.0 then bandwidth 200.0, both class 5 c-type 1
        0x00, 0x04, 0x05, 0x01, 0x42, 0xc8, 0x00, 0x00,
        0x00, 0x04, 0x05, 0x01, 0x43, 0x48, 0x00, 0x00,
    ];

    let good = TeLspAttributes {
        bandwidth: Some(BandwidthObject::Basic(200.0)),
        ..Default::default()
    };
    let registry = default_rsvp_te_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
}

#[test]
fn test_invalid_tlv_type() {
    let bad_wire = [0x00, 0x01, 0x00, 0x00];

    let registry = default_rsvp_te_registry();
    let bad = LocatedTeLspAttributesParsingError::new(
        Span::new(&bad_wire),
        TeLspAttributesParsingError::InvalidTlvType(1),
    );

    test_parse_error_with_one_input::<
        TeLspAttributes,
        &RsvpTeObjectRegistry,
        LocatedTeLspAttributesParsingError<'_>,
    >(&bad_wire, &registry, &bad);
}

#[test]
fn test_unknown_object() {
    let bad_wire = [0x00, 0x63, 0x00, 0x04, 0x00, 0x00, 0xfa, 0x01];

    let registry = default_rsvp_te_registry();
    let bad = LocatedTeLspAttributesParsingError::new(
        unsafe { Span::new_from_raw_offset(4, &bad_wire[4..]) },
        TeLspAttributesParsingError::UnknownObject {
            class_num: 250,
            c_type: 1,
        },
    );

    test_parse_error_with_one_input::<
        TeLspAttributes,
        &RsvpTeObjectRegistry,
        LocatedTeLspAttributesParsingError<'_>,
    >(&bad_wire, &registry, &bad);
}
