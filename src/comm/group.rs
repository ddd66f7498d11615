// Mon Jan 26 2026 - Alex

use crate::comm::error::CommError;
use bytes::Bytes;
use std::sync::mpsc::{channel, Receiver, Sender};

/// One message on a rank's inbox. Frames are typed per collective so a rank
/// blocked in one collective cannot consume another's traffic.
#[derive(Debug, Clone)]
pub enum Frame {
    /// Encoded problem, fanned out by the broadcast origin.
    Problem(Bytes),
    /// One worker's contribution to the sum-reduce.
    Partial(f64),
    /// Uniform shutdown fired by the coordinator before the payload goes out.
    Abort(String),
}

/// Factory for the rank-addressed links of a fixed worker group.
pub struct CommGroup;

impl CommGroup {
    /// Build `size` links, one per rank. Each link can send to every peer
    /// and receives on its own inbox; membership is fixed for the run.
    pub fn links(size: usize) -> Vec<GroupLink> {
        let mut senders = Vec::with_capacity(size);
        let mut inboxes = Vec::with_capacity(size);
        for _ in 0..size {
            let (tx, rx) = channel();
            senders.push(tx);
            inboxes.push(rx);
        }

        inboxes
            .into_iter()
            .enumerate()
            .map(|(rank, inbox)| GroupLink {
                rank,
                size,
                peers: senders.clone(),
                inbox,
            })
            .collect()
    }
}

/// One rank's endpoint into the group. Both collectives are blocking: a rank
/// that never reaches its call leaves the group waiting, by design of the
/// all-or-none protocol. There is no timeout and no cancellation.
pub struct GroupLink {
    rank: usize,
    size: usize,
    peers: Vec<Sender<Frame>>,
    inbox: Receiver<Frame>,
}

impl GroupLink {
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Collective broadcast. The link at `origin` supplies the payload and
    /// fans it out; every other rank blocks until its copy arrives. All
    /// ranks return an identical buffer.
    pub fn broadcast(&self, origin: usize, payload: Option<Bytes>) -> Result<Bytes, CommError> {
        if self.rank == origin {
            let payload = payload.ok_or(CommError::MissingPayload)?;
            for (rank, peer) in self.peers.iter().enumerate() {
                if rank != self.rank {
                    peer.send(Frame::Problem(payload.clone()))
                        .map_err(|_| CommError::Disconnected(rank))?;
                }
            }
            Ok(payload)
        } else {
            match self.recv()? {
                Frame::Problem(payload) => Ok(payload),
                Frame::Abort(reason) => Err(CommError::Aborted(reason)),
                Frame::Partial(_) => {
                    Err(CommError::Protocol("partial sum while awaiting broadcast"))
                }
            }
        }
    }

    /// Collective sum-reduce. Every rank contributes its partial; only
    /// `destination` receives the total. Summation order across ranks is
    /// arrival order and is not specified.
    pub fn reduce_sum(&self, destination: usize, partial: f64) -> Result<Option<f64>, CommError> {
        if self.rank == destination {
            let mut total = partial;
            for _ in 1..self.size {
                match self.recv()? {
                    Frame::Partial(value) => total += value,
                    Frame::Abort(reason) => return Err(CommError::Aborted(reason)),
                    Frame::Problem(_) => {
                        return Err(CommError::Protocol("problem payload while awaiting partials"))
                    }
                }
            }
            Ok(Some(total))
        } else {
            self.peers[destination]
                .send(Frame::Partial(partial))
                .map_err(|_| CommError::Disconnected(destination))?;
            Ok(None)
        }
    }

    /// Terminate every other rank with `reason`. Only meaningful from the
    /// broadcast origin, in place of the payload, so no rank can proceed on
    /// an undefined problem.
    pub fn abort(&self, reason: &str) {
        for (rank, peer) in self.peers.iter().enumerate() {
            if rank != self.rank {
                let _ = peer.send(Frame::Abort(reason.to_string()));
            }
        }
    }

    fn recv(&self) -> Result<Frame, CommError> {
        self.inbox
            .recv()
            .map_err(|_| CommError::Disconnected(self.rank))
    }
}
