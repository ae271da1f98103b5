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
    nlri::{Ipv4LabeledUnicastAddress, Ipv6LabeledUnicastAddress, MplsLabel},
    wire::{
        deserializer::nlri::{
            Ipv4LabeledUnicastParsingError, LocatedIpv4LabeledUnicastParsingError,
        },
        serializer::nlri::{
            Ipv4LabeledUnicastWritingError, Ipv6LabeledUnicastWritingError, MplsLabelWritingError,
        },
    },
};
use ipnet::{Ipv4Net, Ipv6Net};
use netgauze_parse_utils::{
    test_helpers::{
        test_parse_error_with_two_inputs, test_parsed_completely,
        test_parsed_completely_with_two_inputs, test_write, test_write_with_one_input,
    },
    Span,
};
use std::str::FromStr;

#[test]
fn test_mpls_label() -> Result<(), MplsLabelWritingError> {
    let good_wire = [0x00, 0x06, 0x41];

    let good = MplsLabel::new([0x00, 0x06, 0x41]);

    assert_eq!(good.value(), &[0x00, 0x06, 0x41]);
    assert!(good.is_bottom());
    assert_eq!(MplsLabel::new_bottom([0x00, 0x06, 0x40]), good);
    assert!(!MplsLabel::new([0x00, 0x06, 0x40]).is_bottom());
    assert!(MplsLabel::WITHDRAW_SENTINEL.is_unreach_compatibility());

    test_parsed_completely(&good_wire, &good);
    test_write(&good, &good_wire)?;
    Ok(())
}

#[test]
fn test_ipv4_labeled_unicast() -> Result<(), Ipv4LabeledUnicastWritingError> {
    let good_wire = [0x30, 0x00, 0x06, 0x41, 0xc0, 0xa8, 0x01];
    let good_add_path_wire = [
        0x00, 0x00, 0x00, 0x01, 0x30, 0x00, 0x06, 0x41, 0xc0, 0xa8, 0x01,
    ];

    let good = Ipv4LabeledUnicastAddress::new_no_path_id(
        vec![MplsLabel::new([0x00, 0x06, 0x41])],
        Ipv4Net::from_str("192.168.1.0/24").unwrap(),
    );
    let good_add_path = Ipv4LabeledUnicastAddress::new(
        Some(1),
        vec![MplsLabel::new([0x00, 0x06, 0x41])],
        Ipv4Net::from_str("192.168.1.0/24").unwrap(),
    );

    test_parsed_completely_with_two_inputs(&good_wire, false, false, &good);
    test_parsed_completely_with_two_inputs(&good_add_path_wire, true, false, &good_add_path);
    test_write_with_one_input(&good, false, &good_wire)?;
    test_write_with_one_input(&good_add_path, false, &good_add_path_wire)?;
    Ok(())
}

#[test]
fn test_ipv4_labeled_unicast_label_stack() -> Result<(), Ipv4LabeledUnicastWritingError> {
    // two labels, bottom-of-stack bit only on the second
    let good_wire = [
        0x48, 0x00, 0x06, 0x40, 0x00, 0x06, 0x51, 0xc0, 0xa8, 0x01,
    ];

    let good = Ipv4LabeledUnicastAddress::new_no_path_id(
        vec![
            MplsLabel::new([0x00, 0x06, 0x40]),
            MplsLabel::new([0x00, 0x06, 0x51]),
        ],
        Ipv4Net::from_str("192.168.1.0/24").unwrap(),
    );

    test_parsed_completely_with_two_inputs(&good_wire, false, false, &good);
    test_write_with_one_input(&good, false, &good_wire)?;
    Ok(())
}

#[test]
fn test_ipv4_labeled_unicast_bottom_of_stack_on_write() -> Result<(), Ipv4LabeledUnicastWritingError>
{
    let good_wire = [
        0x48, 0x00, 0x06, 0x40, 0x00, 0x06, 0x41, 0xc0, 0xa8, 0x01,
    ];

    // the bottom-of-stack bit belongs to the wire, not the stored labels:
    // the writer clears it on intermediate entries and sets it on the last
    // one no matter what the stack carries
    let good = Ipv4LabeledUnicastAddress::new_no_path_id(
        vec![
            MplsLabel::new([0x00, 0x06, 0x41]),
            MplsLabel::new([0x00, 0x06, 0x40]),
        ],
        Ipv4Net::from_str("192.168.1.0/24").unwrap(),
    );

    test_write_with_one_input(&good, false, &good_wire)?;
    Ok(())
}

#[test]
fn test_ipv4_labeled_unicast_withdrawal() -> Result<(), Ipv4LabeledUnicastWritingError> {
    let good_wire = [0x30, 0x80, 0x00, 0x00, 0xc0, 0xa8, 0x01];

    // the compatibility value terminates the stack without being kept
    let good = Ipv4LabeledUnicastAddress::new_no_path_id(
        vec![],
        Ipv4Net::from_str("192.168.1.0/24").unwrap(),
    );

    test_parsed_completely_with_two_inputs(&good_wire, false, true, &good);
    test_write_with_one_input(&good, true, &good_wire)?;

    // a withdrawal writes the compatibility value no matter what stack the
    // address carries
    let labeled = Ipv4LabeledUnicastAddress::new_no_path_id(
        vec![MplsLabel::new([0x00, 0x06, 0x41])],
        Ipv4Net::from_str("192.168.1.0/24").unwrap(),
    );
    test_write_with_one_input(&labeled, true, &good_wire)?;
    Ok(())
}

#[test]
fn test_ipv4_labeled_unicast_invalid_prefix_length() {
    // bit-length 23 is shorter than the 24 bits of the label it carries
    let bad_wire = [0x17, 0x00, 0x06, 0x41];

    let bad = nom::Err::Error(LocatedIpv4LabeledUnicastParsingError::new(
        Span::new(&bad_wire),
        Ipv4LabeledUnicastParsingError::InvalidPrefixLength(23),
    ));

    test_parse_error_with_two_inputs::<
        Ipv4LabeledUnicastAddress,
        bool,
        bool,
        LocatedIpv4LabeledUnicastParsingError<'_>,
    >(&bad_wire, false, false, bad);
}

#[test]
fn test_ipv6_labeled_unicast() -> Result<(), Ipv6LabeledUnicastWritingError> {
    let good_wire = [
        0x58, 0x00, 0x06, 0x41, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x01, 0x00, 0x00,
    ];

    let good = Ipv6LabeledUnicastAddress::new_no_path_id(
        vec![MplsLabel::new([0x00, 0x06, 0x41])],
        Ipv6Net::from_str("2001:db8:1::/64").unwrap(),
    );

    test_parsed_completely_with_two_inputs(&good_wire, false, false, &good);
    test_write_with_one_input(&good, false, &good_wire)?;
    Ok(())
}

#[test]
fn test_ipv6_labeled_unicast_withdrawal() -> Result<(), Ipv6LabeledUnicastWritingError> {
    let good_wire = [
        0x58, 0x80, 0x00, 0x00, 0x20, 0x01, 0x0d, 0xb8, 0x00, 0x01, 0x00, 0x00,
    ];

    let good = Ipv6LabeledUnicastAddress::new_no_path_id(
        vec![],
        Ipv6Net::from_str("2001:db8:1::/64").unwrap(),
    );

    test_parsed_completely_with_two_inputs(&good_wire, false, true, &good);
    test_write_with_one_input(&good, true, &good_wire)?;
    Ok(())
}
