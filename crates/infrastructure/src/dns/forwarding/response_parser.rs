use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use relaydns_application::ports::UpstreamAnswer;
use relaydns_domain::{normalize_domain, DomainError};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Interpret an upstream reply to an A query. Only the first answer
    /// record is considered: an address ends the chase, an alias continues it.
    pub fn parse_a_answer(domain: &str, response_bytes: &[u8]) -> Result<UpstreamAnswer, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(DomainError::UpstreamRcode {
                domain: domain.to_string(),
                rcode: rcode.to_string(),
            });
        }

        let first = message
            .answers()
            .first()
            .ok_or_else(|| DomainError::EmptyAnswer(domain.to_string()))?;

        debug!(
            domain = %domain,
            answers = message.answers().len(),
            record_type = %first.record_type(),
            "DNS response parsed"
        );

        match first.data() {
            RData::A(a) => Ok(UpstreamAnswer::Address(a.0)),
            RData::CNAME(canonical) => {
                let target = canonical.to_utf8();
                Ok(UpstreamAnswer::Alias(normalize_domain(&target).to_string()))
            }
            _ => Err(DomainError::UnexpectedAnswer {
                domain: domain.to_string(),
                record_type: first.record_type().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::forwarding::MessageBuilder;
    use hickory_proto::op::{MessageType, OpCode};
    use hickory_proto::rr::rdata::{A, AAAA, CNAME};
    use hickory_proto::rr::{Name, Record};
    use std::net::{Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;

    fn reply_with(answers: Vec<RData>, rcode: ResponseCode) -> Vec<u8> {
        let mut message = Message::new(7, MessageType::Response, OpCode::Query);
        message.set_response_code(rcode);
        let name = Name::from_str("example.com.").unwrap();
        for rdata in answers {
            message.add_answer(Record::from_rdata(name.clone(), 60, rdata));
        }
        MessageBuilder::serialize_message(&message).unwrap()
    }

    #[test]
    fn test_address_answer() {
        let bytes = reply_with(vec![RData::A(A(Ipv4Addr::new(1, 2, 3, 4)))], ResponseCode::NoError);

        let answer = ResponseParser::parse_a_answer("example.com", &bytes).unwrap();

        assert_eq!(answer, UpstreamAnswer::Address(Ipv4Addr::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_alias_answer_strips_trailing_dot() {
        let target = Name::from_str("target.example.net.").unwrap();
        let bytes = reply_with(vec![RData::CNAME(CNAME(target))], ResponseCode::NoError);

        let answer = ResponseParser::parse_a_answer("example.com", &bytes).unwrap();

        assert_eq!(answer, UpstreamAnswer::Alias("target.example.net".to_string()));
    }

    #[test]
    fn test_only_first_record_counts() {
        let target = Name::from_str("first.example.net.").unwrap();
        let bytes = reply_with(
            vec![
                RData::CNAME(CNAME(target)),
                RData::A(A(Ipv4Addr::new(9, 9, 9, 9))),
            ],
            ResponseCode::NoError,
        );

        let answer = ResponseParser::parse_a_answer("example.com", &bytes).unwrap();

        assert_eq!(answer, UpstreamAnswer::Alias("first.example.net".to_string()));
    }

    #[test]
    fn test_empty_answer_is_error() {
        let bytes = reply_with(vec![], ResponseCode::NoError);

        let result = ResponseParser::parse_a_answer("example.com", &bytes);

        assert!(matches!(result, Err(DomainError::EmptyAnswer(_))));
    }

    #[test]
    fn test_error_rcode_is_error() {
        let bytes = reply_with(vec![], ResponseCode::NXDomain);

        let result = ResponseParser::parse_a_answer("example.com", &bytes);

        assert!(matches!(result, Err(DomainError::UpstreamRcode { .. })));
    }

    #[test]
    fn test_unexpected_record_type_is_error() {
        let bytes = reply_with(vec![RData::AAAA(AAAA(Ipv6Addr::LOCALHOST))], ResponseCode::NoError);

        let result = ResponseParser::parse_a_answer("example.com", &bytes);

        assert!(matches!(result, Err(DomainError::UnexpectedAnswer { .. })));
    }

    #[test]
    fn test_garbage_is_error() {
        let result = ResponseParser::parse_a_answer("example.com", &[0x01, 0x02]);

        assert!(matches!(result, Err(DomainError::InvalidDnsMessage(_))));
    }
}
