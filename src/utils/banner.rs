const BANNER: &str = r#"
    _    _                    ___ ____     ____ _               _
   / \  | |__  _   _ ___  ___|_ _|  _ \   / ___| |__   ___  ___| | __
  / _ \ | '_ \| | | / __|/ _ \| || |_) | | |   | '_ \ / _ \/ __| |/ /
 / ___ \| |_) | |_| \__ \  __/| ||  __/  | |___| | | |  __/ (__|   <
/_/   \_\_.__/ \__,_|___/\___|___|_|      \____|_| |_|\___|\___|_|\_\
"#;

pub fn banner() -> String {
    format!(
        "{}\nAutomated IP Reputation Checker (AbuseIPDB) v{}\n",
        BANNER,
        env!("CARGO_PKG_VERSION")
    )
}

pub fn print_banner() {
    println!("{}", banner());
}
