#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock answers for one name.
#[derive(Debug, Clone)]
pub enum MockReply {
    Address(Ipv4Addr),
    Alias(String),
    Rcode(ResponseCode),
    /// Never answer; the client must time out.
    Silent,
}

/// Loopback UDP upstream answering from a fixed script. Unknown names get an
/// empty NOERROR reply.
pub struct MockDnsServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(script: Vec<(&str, MockReply)>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let script: HashMap<String, MockReply> = script
            .into_iter()
            .map(|(name, reply)| (format!("{}.", name.trim_end_matches('.')), reply))
            .collect();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&script, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            hits,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn build_mock_response(script: &HashMap<String, MockReply>, query: &[u8]) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();
        let name = question.name().to_utf8();

        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.add_query(question.clone());

        match script.get(&name) {
            Some(MockReply::Silent) => return None,
            Some(MockReply::Address(ip)) => {
                response.add_answer(Record::from_rdata(question.name().clone(), 60, RData::A(A(*ip))));
            }
            Some(MockReply::Alias(target)) => {
                let target = Name::from_str(&format!("{}.", target)).ok()?;
                response.add_answer(Record::from_rdata(
                    question.name().clone(),
                    60,
                    RData::CNAME(CNAME(target)),
                ));
            }
            Some(MockReply::Rcode(code)) => {
                response.set_response_code(*code);
            }
            None => {}
        }

        let mut out = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut out);
        response.emit(&mut encoder).ok()?;
        Some(out)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
