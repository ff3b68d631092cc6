use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yt_scout::common::api::error::ApiError;
use yt_scout::common::models::{SearchOrder, VideoDetails, VideoReport};
use yt_scout::scout::{Scout, ScoutError, ViralQuery};
use yt_scout::{SearchProvider, YoutubeClient};

const KEY: &str = "test-key";

fn create_test_client(server: &MockServer) -> YoutubeClient {
    YoutubeClient::new(KEY, &server.uri()).unwrap()
}

fn create_test_query(keywords: &[&str]) -> ViralQuery {
    ViralQuery {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        days: 5,
        min_minutes: 20,
        max_subscribers: 3000,
        per_keyword: 5,
    }
}

fn search_item(video_id: &str, channel_id: &str, title: &str) -> serde_json::Value {
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "channelId": channel_id,
            "title": title,
            "description": format!("{} 的简介", title)
        }
    })
}

fn video_item(id: &str, channel_id: &str, title: &str, duration: &str, views: &str) -> serde_json::Value {
    json!({
        "id": id,
        "snippet": { "title": title, "description": "简介", "channelId": channel_id },
        "contentDetails": { "duration": duration },
        "statistics": { "viewCount": views }
    })
}

fn channel_item(id: &str, subs: &str) -> serde_json::Value {
    json!({ "id": id, "statistics": { "subscriberCount": subs } })
}

async fn mount_json(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", endpoint)))
        .and(query_param("key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_videos_sends_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "King Kong"))
        .and(query_param("type", "video"))
        .and(query_param("order", "viewCount"))
        .and(query_param("maxResults", "3"))
        .and(query_param("key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                search_item("aaaaaaaaaaa", "UC1", "视频A"),
                // 频道结果没有 videoId，应被忽略
                { "id": { "kind": "youtube#channel", "channelId": "UC9" }, "snippet": { "title": "频道" } },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let hits = client
        .search_videos("King Kong", None, Some(SearchOrder::ViewCount), 3)
        .await
        .unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].video_id, "aaaaaaaaaaa");
    assert_eq!(hits[0].channel_id, "UC1");
    assert_eq!(hits[0].title, "视频A");
}

#[tokio::test]
async fn test_video_details_lenient_statistics() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "videos",
        json!({
            "items": [
                video_item("aaaaaaaaaaa", "UC1", "A", "PT21M3S", "1234"),
                // 缺少 contentDetails 与 statistics
                { "id": "bbbbbbbbbbb", "snippet": { "title": "B" } },
                video_item("ccccccccccc", "UC3", "C", "P0D", "not-a-number"),
            ]
        }),
    )
    .await;

    let client = create_test_client(&server);
    let ids = vec![
        "aaaaaaaaaaa".to_string(),
        "bbbbbbbbbbb".to_string(),
        "ccccccccccc".to_string(),
    ];
    let details = client.video_details(&ids).await.unwrap();

    assert_eq!(details.len(), 3);
    assert_eq!(details[0].view_count, 1234);
    assert_eq!(details[0].duration_seconds(), 1263);
    assert_eq!(details[1].duration, "PT0M0S");
    assert_eq!(details[1].view_count, 0);
    assert_eq!(details[2].duration_seconds(), 0);
    assert_eq!(details[2].view_count, 0);
}

#[tokio::test]
async fn test_empty_ids_skip_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    assert!(client.video_details(&[]).await.unwrap().is_empty());
    assert!(client.channel_stats(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_http_error_carries_platform_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let err = client
        .channel_stats(&["UC1".to_string()])
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "quotaExceeded");
        }
        other => panic!("期望 HTTP 错误, 实际: {:?}", other),
    }
}

#[test]
fn test_invalid_api_base() {
    assert!(matches!(
        YoutubeClient::new(KEY, "not a url"),
        Err(ApiError::InvalidBase(_))
    ));
}

#[test]
fn test_report_keeps_huge_duration() {
    let details = VideoDetails {
        id: "aaaaaaaaaaa".to_string(),
        title: "超长直播回放".to_string(),
        description: String::new(),
        channel_id: "UC1".to_string(),
        view_count: 1,
        duration: "PT9223372036854775808S".to_string(),
    };
    let report = VideoReport::from_details(&details, None);

    assert_eq!(report.duration_seconds, Some(9_223_372_036_854_775_808));
    assert_eq!(report.duration.as_deref(), Some("2562047788015215:30:08"));
}

#[tokio::test]
async fn test_viral_filters_by_subscribers_and_duration() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "search",
        json!({
            "items": [
                search_item("aaaaaaaaaaa", "UC_small", "长视频小频道"),
                search_item("bbbbbbbbbbb", "UC_big", "长视频大频道"),
                search_item("ccccccccccc", "UC_small", "短视频小频道"),
                search_item("ddddddddddd", "UC_edge", "订阅数正好等于上限"),
            ]
        }),
    )
    .await;
    // 返回顺序与请求顺序不同
    mount_json(
        &server,
        "videos",
        json!({
            "items": [
                video_item("ddddddddddd", "UC_edge", "订阅数正好等于上限", "PT1H", "10"),
                video_item("ccccccccccc", "UC_small", "短视频小频道", "PT19M59S", "500"),
                video_item("bbbbbbbbbbb", "UC_big", "长视频大频道", "PT30M", "900000"),
                video_item("aaaaaaaaaaa", "UC_small", "长视频小频道", "PT20M", "42000"),
            ]
        }),
    )
    .await;
    mount_json(
        &server,
        "channels",
        json!({
            "items": [
                channel_item("UC_big", "120000"),
                channel_item("UC_edge", "3000"),
                channel_item("UC_small", "2999"),
            ]
        }),
    )
    .await;

    let scout = Scout::new(create_test_client(&server));
    let outcome = scout.viral(&create_test_query(&["Dinosaur"])).await;

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.reports.len(), 1);

    let report = &outcome.reports[0];
    assert_eq!(report.title, "长视频小频道");
    assert_eq!(report.url, "https://www.youtube.com/watch?v=aaaaaaaaaaa");
    assert_eq!(report.views, Some(42000));
    assert_eq!(report.subscribers, Some(2999));
    assert_eq!(report.duration_seconds, Some(1200));
    assert_eq!(report.duration.as_deref(), Some("20:00"));
}

#[tokio::test]
async fn test_viral_skips_empty_and_failing_keywords() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [search_item("aaaaaaaaaaa", "UC1", "好视频")]
        })))
        .mount(&server)
        .await;
    mount_json(
        &server,
        "videos",
        json!({ "items": [video_item("aaaaaaaaaaa", "UC1", "好视频", "PT1H2M3S", "7")] }),
    )
    .await;
    mount_json(
        &server,
        "channels",
        json!({ "items": [channel_item("UC1", "12")] }),
    )
    .await;

    let scout = Scout::new(create_test_client(&server));
    let outcome = scout
        .viral(&create_test_query(&["Empty", "Broken", "Good"]))
        .await;

    let skipped: Vec<&str> = outcome.skipped.iter().map(|s| s.keyword.as_str()).collect();
    assert_eq!(skipped, vec!["Empty", "Broken"]);
    assert!(outcome.skipped[1].reason.contains("500"));

    assert_eq!(outcome.reports.len(), 1);
    assert_eq!(outcome.reports[0].duration.as_deref(), Some("1:02:03"));
}

#[tokio::test]
async fn test_viral_deduplicates_across_keywords() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "search",
        json!({ "items": [search_item("aaaaaaaaaaa", "UC1", "同一个视频")] }),
    )
    .await;
    mount_json(
        &server,
        "videos",
        json!({ "items": [video_item("aaaaaaaaaaa", "UC1", "同一个视频", "PT25M", "100")] }),
    )
    .await;
    mount_json(
        &server,
        "channels",
        json!({ "items": [channel_item("UC1", "10")] }),
    )
    .await;

    let scout = Scout::new(create_test_client(&server));
    let outcome = scout.viral(&create_test_query(&["Hulk", "Thor"])).await;

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.reports.len(), 1);
}

#[tokio::test]
async fn test_similar_searches_by_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "dQw4w9WgXcQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [video_item("dQw4w9WgXcQ", "UC1", "Never Gonna Give You Up", "PT3M33S", "1500000000")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Never Gonna Give You Up"))
        .and(query_param("maxResults", "3"))
        .and(query_param("order", "relevance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                search_item("dQw4w9WgXcQ", "UC1", "Never Gonna Give You Up"),
                search_item("aaaaaaaaaaa", "UC2", "Cover"),
                search_item("bbbbbbbbbbb", "UC3", "Remix"),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scout = Scout::new(create_test_client(&server));
    let outcome = scout
        .similar("https://youtu.be/dQw4w9WgXcQ?t=5", 3)
        .await
        .unwrap();

    assert_eq!(outcome.original.title, "Never Gonna Give You Up");
    assert_eq!(outcome.original.duration.as_deref(), Some("3:33"));
    assert_eq!(outcome.original.views, Some(1_500_000_000));

    // 原视频本身不出现在同类列表里
    let titles: Vec<&str> = outcome.similar.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Cover", "Remix"]);
    assert!(outcome.similar.iter().all(|r| r.views.is_none()));
}

#[tokio::test]
async fn test_similar_rejects_bad_input_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let scout = Scout::new(create_test_client(&server));
    let err = scout.similar("not a url at all", 5).await.unwrap_err();

    assert!(err.is_user_error());
    assert!(matches!(err, ScoutError::InvalidInput(_)));
}

#[tokio::test]
async fn test_similar_video_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "videos", json!({ "items": [] })).await;

    let scout = Scout::new(create_test_client(&server));
    let err = scout.similar("dQw4w9WgXcQ", 5).await.unwrap_err();

    assert!(!err.is_user_error());
    assert!(matches!(err, ScoutError::Api(ApiError::NotFound(_))));
}
