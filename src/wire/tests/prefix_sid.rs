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
    iana::BgpSidAttributeType,
    nlri::MplsLabel,
    prefix_sid::{BgpSidAttribute, PrefixSegmentIdentifier, SegmentRoutingGlobalBlock},
    wire::{
        deserializer::prefix_sid::{
            default_prefix_sid_registry, BgpSidAttributeParsingError, BgpSidAttributeRegistry,
            LocatedSegmentIdentifierParsingError, SegmentIdentifierParsingError,
        },
        serializer::prefix_sid::SegmentIdentifierWritingError,
    },
};
use netgauze_parse_utils::{
    test_helpers::{
        test_parse_error_with_one_input, test_parsed_completely_with_one_input, test_write,
    },
    Span,
};

#[test]
fn test_label_index() -> Result<(), SegmentIdentifierWritingError> {
    let good_wire = [
        0x01, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    ];

    let good = PrefixSegmentIdentifier::new(vec![BgpSidAttribute::LabelIndex {
        flags: 0,
        label_index: 65536,
    }]);
    let registry = default_prefix_sid_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_originator_srgb() -> Result<(), SegmentIdentifierWritingError> {
    let good_wire = [
        0x03, 0x00, 0x08, 0x00, 0x00, 0x01, 0x86, 0xa0, 0x00, 0x00, 0x64,
    ];

    let good = PrefixSegmentIdentifier::new(vec![BgpSidAttribute::Originator {
        flags: 0,
        srgbs: vec![SegmentRoutingGlobalBlock {
            first_label: MplsLabel::new([0x01, 0x86, 0xa0]),
            range_size: [0x00, 0x00, 0x64],
        }],
    }]);
    let registry = default_prefix_sid_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_unknown_tlv_preserved() -> Result<(), SegmentIdentifierWritingError> {
    let good_wire = [0xef, 0x00, 0x03, 0x01, 0x02, 0x03];

    let good = PrefixSegmentIdentifier::new(vec![BgpSidAttribute::Unknown {
        code: 0xef,
        value: vec![0x01, 0x02, 0x03],
    }]);
    let registry = default_prefix_sid_registry();

    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_deregistered_code_falls_back_to_unknown() {
    let good_wire = [
        0x01, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00,
    ];

    let mut registry = default_prefix_sid_registry();
    assert!(registry
        .deregister(&(BgpSidAttributeType::LabelIndex as u8))
        .is_some());

    let good = PrefixSegmentIdentifier::new(vec![BgpSidAttribute::Unknown {
        code: BgpSidAttributeType::LabelIndex as u8,
        value: vec![0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00],
    }]);
    test_parsed_completely_with_one_input(&good_wire, &registry, &good);
}

#[test]
fn test_invalid_srgb_length() {
    // five octets after the flags, not a whole 6-octet block
    let bad_wire = [
        0x03, 0x00, 0x07, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05,
    ];

    let registry = default_prefix_sid_registry();
    let bad = LocatedSegmentIdentifierParsingError::new(
        unsafe { Span::new_from_raw_offset(5, &bad_wire[5..]) },
        SegmentIdentifierParsingError::BgpSidAttributeError(
            BgpSidAttributeParsingError::InvalidSrgbLength(5),
        ),
    );

    test_parse_error_with_one_input::<
        PrefixSegmentIdentifier,
        &BgpSidAttributeRegistry,
        LocatedSegmentIdentifierParsingError<'_>,
    >(&bad_wire, &registry, &bad);
}
