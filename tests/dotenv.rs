use std::{env, fs};

use rank_proxy::{config::Config, logging};

#[test]
fn logging_settings_from_dotenv_are_honored() {
    let root = env::temp_dir().join(format!("rank-proxy-dotenv-{}", std::process::id()));
    let log_dir = root.join("logs");
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join(".env"),
        format!(
            "RIOT_API_KEY=RGAPI-DOTENV\nLOG_DIR={}\nLOG_MAX_FILES=2\n",
            log_dir.display()
        ),
    )
    .unwrap();
    env::set_current_dir(&root).unwrap();

    let config = Config::from_env().unwrap();

    assert_eq!(config.log.dir.as_deref(), Some(log_dir.as_path()));
    assert_eq!(config.log.max_files, Some(2));
    assert!(!log_dir.exists());

    logging::init(&config.log).unwrap();

    let files: Vec<String> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        files.iter().any(|name| name.starts_with("rank-proxy.log")),
        "no log file in {:?}",
        files
    );

    let _ = fs::remove_dir_all(&root);
}
