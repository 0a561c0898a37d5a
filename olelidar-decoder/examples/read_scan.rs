use clap::{Arg, Command};
use olelidar_data::ScanConfig;
use olelidar_decoder::run_decoder;
use std::net::UdpSocket;

fn get_bind_address() -> String {
    let matches = Command::new("LiDAR scan receiver.")
        .about("Decodes OLEi sensor packets arriving over UDP.")
        .disable_version_flag(true)
        .arg(
            Arg::new("bind")
                .help("The address to listen on for sensor packets")
                .use_value_delimiter(false)
                .default_value("0.0.0.0:2368"),
        )
        .get_matches();

    let bind: &String = matches.get_one("bind").unwrap();
    bind.to_string()
}

fn main() {
    tracing_subscriber::fmt::init();

    let bind = get_bind_address();
    let socket = UdpSocket::bind(&bind).unwrap();

    let (_decoder_threads, packet_tx, scan_rx, _config_tx) = run_decoder(ScanConfig::default());

    std::thread::spawn(move || {
        let mut buf = [0u8; 2048];
        loop {
            let n = match socket.recv(&mut buf) {
                Ok(n) => n,
                Err(_) => break,
            };
            if packet_tx.send(buf[..n].to_vec()).is_err() {
                break;
            }
        }
    });

    loop {
        let scan = scan_rx.recv();
        if scan.is_err() {
            break;
        }
        let scan = scan.unwrap();
        println!("{}", serde_json::to_string(&scan).unwrap());
    }
}
