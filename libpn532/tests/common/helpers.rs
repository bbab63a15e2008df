// helpers.rs: MockTransport-backed device setup

use libpn532::device::{Device, Initialized};
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;

/// Mock plus an initialized device sharing its state.
pub fn mock_device() -> (MockTransport, Device<Initialized>) {
    let mock = MockTransport::new();
    let device = test_support::initialized_mock_device(&mock).unwrap();
    (mock, device)
}

/// Queue `count` READ replies serving consecutive pages of `image`.
pub fn push_pages(mock: &MockTransport, image: &[u8], count: usize) {
    for i in 0..count {
        let mut data = [0u8; 16];
        for (j, b) in data.iter_mut().enumerate() {
            *b = image.get(i * 4 + j).copied().unwrap_or(0);
        }
        mock.push_response(test_support::read_reply(&data));
    }
}
