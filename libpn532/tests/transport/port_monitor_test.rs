use std::sync::{Arc, Mutex};

use libpn532::transport::PortMonitor;
use libpn532::{Error, Result};

fn monitor_over(ports: Arc<Mutex<Vec<String>>>, watched: &str) -> PortMonitor {
    let enumerate = move || -> Result<Vec<String>> {
        Ok(ports.lock().unwrap().clone())
    };
    PortMonitor::new(Box::new(enumerate), watched)
}

#[test]
fn unplugging_reports_port_lost() {
    let ports = Arc::new(Mutex::new(vec!["COM3".to_string(), "COM4".to_string()]));
    let monitor = monitor_over(ports.clone(), "COM4");
    assert_eq!(monitor.port(), "COM4");
    assert!(monitor.check().is_ok());

    ports.lock().unwrap().retain(|p| p != "COM4");
    match monitor.check() {
        Err(Error::PortLost { port }) => assert_eq!(port, "COM4"),
        other => panic!("expected PortLost, got: {:?}", other),
    }

    // 再接続されれば復帰する
    ports.lock().unwrap().push("COM4".to_string());
    assert!(monitor.check().is_ok());
}
