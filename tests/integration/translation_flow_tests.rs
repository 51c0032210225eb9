/*!
 * Tests for translation asset acquisition over HTTP
 */

use std::sync::Arc;
use std::time::Duration;

use crate::common::{SAMPLE_LANG_ASSET, spawn_server, spawn_server_with_status};
use homematic_rega::TranslationCache;
use homematic_rega::encoding::encode_latin1;
use homematic_rega::translation::HttpLangFetcher;

fn http_cache(host: String, port: u16) -> TranslationCache {
    let fetcher = HttpLangFetcher::new(
        format!("http://{}:{}/webui/js/lang/de/translate.lang.extension.js", host, port),
        Duration::from_secs(5),
    );
    TranslationCache::new(true, Arc::new(fetcher))
}

#[tokio::test]
async fn test_httpFetch_withServedAsset_shouldLoadTable() {
    let server = spawn_server(encode_latin1(SAMPLE_LANG_ASSET)).await;
    let cache = http_cache(server.host(), server.port());

    let table = cache.ensure_ready().await;
    assert_eq!(table.len(), 5);
    assert_eq!(cache.translate("${room.1}"), "Wohnzimmer");
}

#[tokio::test]
async fn test_httpFetch_withLatin1Asset_shouldDecodeValues() {
    // the asset itself travels as ISO-8859-1, raw umlaut byte included
    let asset = "\"room.7\" : \"Diele (üblich)\"";
    let server = spawn_server(encode_latin1(asset)).await;
    let cache = http_cache(server.host(), server.port());

    cache.ensure_ready().await;
    assert_eq!(cache.translate("room.7"), "Diele (üblich)");
}

#[tokio::test]
async fn test_httpFetch_concurrentFirstCallers_shouldHitServerOnce() {
    let server = spawn_server(encode_latin1(SAMPLE_LANG_ASSET)).await;
    let cache = Arc::new(http_cache(server.host(), server.port()));

    let tasks: Vec<_> = (0..6)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.ensure_ready().await.len() })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), 5);
    }
    assert_eq!(server.hit_count(), 1);
}

#[tokio::test]
async fn test_httpFetch_withNotFound_shouldDegradeToEmptyTable() {
    let server = spawn_server_with_status(404, b"Not Found".to_vec()).await;
    let cache = http_cache(server.host(), server.port());

    let table = cache.ensure_ready().await;
    assert!(table.is_empty());
    assert!(cache.is_ready());
    assert_eq!(cache.translate("${room.1}"), "${room.1}");
}

#[tokio::test]
async fn test_httpFetch_withEmptyBody_shouldDegradeToEmptyTable() {
    let server = spawn_server(Vec::new()).await;
    let cache = http_cache(server.host(), server.port());

    assert!(cache.ensure_ready().await.is_empty());
    // degraded is still settled, no retry on later calls
    cache.ensure_ready().await;
    assert_eq!(server.hit_count(), 1);
}

#[tokio::test]
async fn test_httpFetch_withUnreachableHost_shouldDegradeToEmptyTable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let cache = http_cache("127.0.0.1".to_string(), port);
    let table = cache.ensure_ready().await;
    assert!(table.is_empty());
    assert!(cache.is_ready());
}
