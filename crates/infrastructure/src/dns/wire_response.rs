//! Inbound query decoding and A-record reply synthesis.

use crate::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use relaydns_domain::{normalize_domain, DomainError, QueryType};
use std::net::Ipv4Addr;

pub const ANSWER_TTL: u32 = 60;

/// A decoded client query together with the parsed message, kept for
/// building the reply.
#[derive(Debug, Clone)]
pub struct InboundQuery {
    pub message: Message,
    pub domain: String,
    pub query_type: QueryType,
}

pub fn parse_query(payload: &[u8]) -> Result<InboundQuery, DomainError> {
    let message = Message::from_vec(payload)
        .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to parse query: {}", e)))?;

    if message.message_type() != MessageType::Query {
        return Err(DomainError::InvalidDnsMessage(
            "Message is not a query".to_string(),
        ));
    }

    let question = message
        .queries()
        .first()
        .ok_or_else(|| DomainError::InvalidDnsMessage("Query has no question".to_string()))?;

    let name = question.name().to_utf8();
    let domain = normalize_domain(&name).to_string();
    let query_type = QueryType::from(u16::from(question.query_type()));

    Ok(InboundQuery {
        message,
        domain,
        query_type,
    })
}

/// Build an authoritative NOERROR reply carrying a single A record for the
/// first question, mirroring the query's id, opcode, RD flag and questions.
pub fn build_a_response(query: &Message, addr: Ipv4Addr) -> Result<Vec<u8>, DomainError> {
    let question = query
        .queries()
        .first()
        .ok_or_else(|| DomainError::Encode("Query has no question".to_string()))?;

    let mut response = Message::new(query.id(), MessageType::Response, query.op_code());
    response.set_recursion_desired(query.recursion_desired());
    response.set_authoritative(true);
    response.set_response_code(ResponseCode::NoError);
    for q in query.queries() {
        response.add_query(q.clone());
    }
    response.add_answer(Record::from_rdata(
        question.name().clone(),
        ANSWER_TTL,
        RData::A(A(addr)),
    ));

    MessageBuilder::serialize_message(&response)
}
