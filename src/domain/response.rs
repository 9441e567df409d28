#[derive(Debug, Clone, PartialEq)]
/// Result of a delivered alert.
///
/// Produced only by deserializing a service response; the client never
/// constructs one itself.
pub struct AlertResponse {
    /// Opaque identifier assigned to the accepted message.
    pub message_id: String,
    /// Number of billing parts the message was split into (at least 1).
    pub parts: u32,
    /// Total delivery cost, non-negative.
    pub cost: f64,
    /// Currency code for `cost`.
    pub currency: String,
    /// Text encoding the service selected for the message.
    pub encoding: String,
    /// Character count as the service measured it.
    pub characters: u32,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of a dry-run part/cost calculation. Nothing is delivered.
pub struct PartsResponse {
    pub parts: u32,
    pub cost: f64,
    pub currency: String,
    pub encoding: String,
    pub characters: u32,
    /// The exact outbound text the service would send.
    pub message: String,
}
