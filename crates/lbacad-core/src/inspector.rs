//! L4 vs L7 packet inspector content
//!
//! Static field sets describing what each kind of load balancer can see
//! inside a packet, plus the routing commentary shown for the selected
//! layer and path.

/// OSI layer the inspector is looking from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacketLayer {
    /// Transport layer: IPs, ports, opaque payload
    #[default]
    L4,
    /// Application layer: full HTTP request visible
    L7,
}

impl PacketLayer {
    pub fn label(&self) -> &'static str {
        match self {
            PacketLayer::L4 => "Layer 4 (Transport)",
            PacketLayer::L7 => "Layer 7 (Application)",
        }
    }

    pub fn protocol_badge(&self) -> &'static str {
        match self {
            PacketLayer::L4 => "TCP/UDP",
            PacketLayer::L7 => "HTTP/S",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            PacketLayer::L4 => PacketLayer::L7,
            PacketLayer::L7 => PacketLayer::L4,
        }
    }
}

/// Route path selectable in L7 mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutePath {
    #[default]
    Images,
    Video,
}

impl RoutePath {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Images => "/images",
            RoutePath::Video => "/video",
        }
    }

    pub fn cluster(&self) -> &'static str {
        match self {
            RoutePath::Images => "Image-Optimization-Cluster",
            RoutePath::Video => "High-Throughput-Video-Cluster",
        }
    }
}

/// A name/value pair from the packet header dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketField {
    pub name: &'static str,
    pub value: &'static str,
}

/// Header fields visible to the inspector at the given layer
pub fn packet_fields(layer: PacketLayer, path: RoutePath) -> Vec<PacketField> {
    match layer {
        PacketLayer::L4 => vec![
            PacketField {
                name: "protocol",
                value: "TCP",
            },
            PacketField {
                name: "src ip",
                value: "203.0.113.1",
            },
            PacketField {
                name: "dest ip",
                value: "10.0.0.5",
            },
            PacketField {
                name: "port",
                value: "443",
            },
            PacketField {
                name: "payload",
                value: "ENCRYPTED_STREAM (Binary Data)",
            },
        ],
        PacketLayer::L7 => vec![
            PacketField {
                name: "protocol",
                value: "HTTP/2",
            },
            PacketField {
                name: "method",
                value: "GET",
            },
            PacketField {
                name: "path",
                value: path.as_str(),
            },
            PacketField {
                name: "host",
                value: "api.myapp.com",
            },
            PacketField {
                name: "auth",
                value: "Bearer eyJhbGci...",
            },
        ],
    }
}

/// The routing decision the balancer would voice at this layer
pub fn routing_commentary(layer: PacketLayer, path: RoutePath) -> String {
    match layer {
        PacketLayer::L4 => {
            "I only see IP 203.0.113.1 and Port 443. I will route this connection blindly to Server A.".to_string()
        }
        PacketLayer::L7 => format!(
            "Ah, I see an HTTP request for {}. Routing to {}.",
            path.as_str(),
            path.cluster()
        ),
    }
}
