//! 上傳流程端對端測試
//!
//! 依序執行前綴移除、交錯排序、標題處理、排程與清空

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use auto_video_upload::component::folder_cleaner::clear_folder;
use auto_video_upload::component::prefix_renamer::rename_directory;
use auto_video_upload::component::publish_scheduler::{
    ManifestPlatform, UploadManifest, UploadedVideo, apply_schedule, build_schedule,
    list_uploaded_videos,
};
use auto_video_upload::component::upload_preparer::prepare_uploads;
use auto_video_upload::component::video_shuffler::{MAX_CONSECUTIVE, shuffle_folders};
use auto_video_upload::config::WorkflowSettings;
use chrono::{Duration, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn create_profile(root: &Path, name: &str, count: usize) -> PathBuf {
    let folder = root.join(name);
    fs::create_dir_all(&folder).unwrap();
    for i in 1..=count {
        fs::write(folder.join(format!("{i:03}_{name} clip {i} #fyp #{name}.mp4")), name).unwrap();
    }
    fs::write(folder.join("thumbnail.jpg"), "image").unwrap();
    folder
}

fn file_names(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_full_upload_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let shutdown = AtomicBool::new(false);

    let profile_a = create_profile(root, "alpha", 4);
    let profile_b = create_profile(root, "beta", 3);

    // 1. 移除下載前綴
    for profile in [&profile_a, &profile_b] {
        let result = rename_directory(profile, &shutdown).unwrap();
        assert_eq!(result.errors, 0);
    }
    assert!(profile_a.join("alpha clip 1 #fyp #alpha.mp4").exists());

    // 2. 交錯排序並依序複製
    let mut workflow = WorkflowSettings::default();
    workflow.upload_prep.fixed_hashtags = vec!["#brand".to_string(), "#daily".to_string()];
    workflow.upload_prep.hashtag_pick_count = 2;

    let shuffled = root.join("shuffled_uploads");
    let summary =
        shuffle_folders(&[profile_a.clone(), profile_b.clone()], &shuffled, &workflow, &shutdown)
            .unwrap();

    assert_eq!(summary.bucket_sizes, vec![4, 3]);
    assert_eq!(summary.copy.copied, 7);
    assert!(summary.order.longest_run() <= MAX_CONSECUTIVE);

    let shuffled_names = file_names(&shuffled);
    assert_eq!(shuffled_names.len(), 7);
    assert!(shuffled_names[0].starts_with("0001_alpha clip 4"));
    assert!(shuffled_names[1].starts_with("0002_beta clip 3"));
    assert!(shuffled_names[6].starts_with("0007_alpha clip 1"));

    // 3. 改寫標題
    let ready = root.join("ready_uploads");
    let mut rng = StdRng::seed_from_u64(11);
    let prepared = prepare_uploads(&shuffled, &ready, &workflow, &mut rng, &shutdown).unwrap();

    assert_eq!(prepared.copied, 7);
    assert_eq!(prepared.within_limit, 7);
    for name in file_names(&ready) {
        assert!(name.contains(" #shorts "), "{name}");
        assert!(!name.contains("#fyp"), "{name}");
        assert!(name.contains("#brand") && name.contains("#daily"), "{name}");
    }

    // 4. 排程發布
    let manifest_path = root.join("uploads_manifest.json");
    let manifest = UploadManifest {
        uploads_playlist_id: "UUchannel".to_string(),
        videos: file_names(&ready)
            .into_iter()
            .enumerate()
            .map(|(i, title)| UploadedVideo {
                video_id: format!("id{i}"),
                title,
            })
            .collect(),
        status_updates: Vec::new(),
    };
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();

    let mut platform = ManifestPlatform::open(&manifest_path).unwrap();
    let videos = list_uploaded_videos(&platform).unwrap();
    let start = Utc.with_ymd_and_hms(2030, 6, 1, 0, 5, 0).unwrap();
    let plan = build_schedule(&videos, start, Duration::minutes(240)).unwrap();
    let scheduled = apply_schedule(&mut platform, &plan, &shutdown).unwrap();

    assert_eq!(scheduled.scheduled, 7);
    let saved = ManifestPlatform::open(&manifest_path).unwrap();
    let updates = &saved.manifest().status_updates;
    assert_eq!(updates.len(), 7);
    assert_eq!(updates[0].status.publish_at, "2030-06-01T00:05:00.000Z");
    assert_eq!(updates[6].status.publish_at, "2030-06-02T00:05:00.000Z");
    assert!(updates.iter().all(|u| u.status.privacy_status == "private"));

    // 5. 清空待上傳資料夾
    let cleared = clear_folder(&ready, &shutdown).unwrap();
    assert_eq!(cleared.files_deleted, 7);
    assert!(file_names(&ready).is_empty());
}

#[test]
fn test_shuffle_keeps_every_video_once() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let shutdown = AtomicBool::new(false);

    let folders = vec![
        create_profile(root, "one", 5),
        create_profile(root, "two", 2),
        create_profile(root, "three", 0),
        create_profile(root, "four", 9),
    ];

    let summary = shuffle_folders(
        &folders,
        &root.join("out"),
        &WorkflowSettings::default(),
        &shutdown,
    )
    .unwrap();

    let expected: HashSet<PathBuf> = folders
        .iter()
        .flat_map(|folder| fs::read_dir(folder).unwrap())
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "mp4"))
        .collect();
    let actual: HashSet<PathBuf> = summary.order.items.iter().cloned().collect();

    assert_eq!(summary.order.items.len(), 16);
    assert_eq!(actual, expected);
    assert_eq!(summary.copy.copied, 16);
}

#[test]
fn test_shuffle_rejects_missing_source() {
    let temp_dir = TempDir::new().unwrap();
    let result = shuffle_folders(
        &[temp_dir.path().join("missing")],
        &temp_dir.path().join("out"),
        &WorkflowSettings::default(),
        &AtomicBool::new(false),
    );
    assert!(result.is_err());
}
