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

//! Representation and wire serde for a set of BGP extensions:
//!
//! 1. BGP Link-State attributes ([RFC7752](https://datatracker.ietf.org/doc/html/rfc7752))
//!    for the link, node, prefix, and TE-LSP object kinds.
//! 2. Labeled-unicast NLRI ([RFC8277](https://datatracker.ietf.org/doc/html/rfc8277)).
//! 3. The BGP Prefix-SID path attribute ([RFC8669](https://datatracker.ietf.org/doc/html/rfc8669)).
//! 4. RSVP-TE objects carried inside TE-LSP link-state attributes
//!    ([RFC3209](https://datatracker.ietf.org/doc/html/rfc3209) and friends).
//!
//! Decoders for TLV codes and RSVP object classes are dispatched through
//! [registry::ParserRegistry], so applications can extend or override the
//! built-in handlers.

pub mod bgp_ls;
pub mod iana;
pub mod nlri;
pub mod prefix_sid;
pub mod registry;
pub mod rsvp_te;
pub mod wire;
