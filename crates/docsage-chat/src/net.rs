//! Internet reachability probe.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

const PROBE_HOST: (&str, u16) = ("www.google.com", 80);
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Attempt a short-timeout TCP connection to a well-known public host.
///
/// Reported through the status endpoint only; the chat call is never gated
/// on it, since the model endpoint is local and must stay usable offline.
pub fn is_connected() -> bool {
    let Ok(addrs) = PROBE_HOST.to_socket_addrs() else {
        return false;
    };
    for addr in addrs {
        if TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok() {
            return true;
        }
    }
    false
}
