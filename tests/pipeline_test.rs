mod common;

use common::{summary, summary_with_video, FakeDiscogsClient};
use discogs_top_rated::{
    render_report, AsyncPaginatedIterator, DiscogsError, ReleaseDetail, SearchCriteria,
    SearchResultsIterator, TopRatedSearch,
};

fn criteria(min_rating: f64, no_videos: bool) -> SearchCriteria {
    SearchCriteria::builder()
        .filter("style", "ambient")
        .unwrap()
        .min_rating(min_rating)
        .no_videos(no_videos)
        .build()
}

#[test_log::test(tokio::test)]
async fn end_to_end_keeps_items_above_threshold_in_order() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary(2), summary(3)]])
        .with_rating(1, 5.0, 10)
        .with_rating(2, 3.5, 10)
        .with_rating(3, 4.2, 10);

    let report = TopRatedSearch::new(client)
        .run(&criteria(4.0, false))
        .await
        .unwrap();

    assert_eq!(report.total_results, 3);
    let ids: Vec<u64> = report.releases.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(report.releases[0].rating, 5.0);
    assert_eq!(report.releases[1].rating, 4.2);

    let text = render_report(&report);
    assert!(text.starts_with("3 results.\n2 results with high ratings:\n"));
}

#[test_log::test(tokio::test)]
async fn zero_threshold_returns_everything() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary(2), summary(3)]])
        .with_rating(1, 0.0, 0)
        .with_rating(2, 2.1, 3)
        .with_rating(3, 4.9, 7);

    let report = TopRatedSearch::new(client)
        .run(&criteria(0.0, false))
        .await
        .unwrap();

    assert_eq!(report.releases.len() as u64, report.total_results);
    assert_eq!(report.releases.len(), 3);
}

#[test_log::test(tokio::test)]
async fn pagination_accumulates_all_pages_before_any_detail_fetch() {
    let first_page: Vec<_> = (1..=50).map(summary).collect();
    let second_page: Vec<_> = (51..=69).map(summary).collect();

    let mut client = FakeDiscogsClient::new().with_pages(vec![first_page, second_page]);
    for id in 1..=69 {
        client = client.with_rating(id, 4.5, 1);
    }

    let pipeline = TopRatedSearch::new(client);
    let report = pipeline.run(&criteria(4.0, false)).await.unwrap();

    assert_eq!(report.total_results, 69);
    assert_eq!(report.releases.len(), 69);

    // Every search call happens before the first release call
    let kinds = pipeline.client().call_kinds();
    let first_release = kinds.iter().position(|k| k == "release").unwrap();
    let last_search = kinds.iter().rposition(|k| k == "search").unwrap();
    assert!(last_search < first_release);
    assert_eq!(kinds.iter().filter(|k| *k == "search").count(), 2);
    assert_eq!(kinds.iter().filter(|k| *k == "release").count(), 69);
}

#[test_log::test(tokio::test)]
async fn iterator_yields_exactly_the_accumulated_summaries() {
    let first_page: Vec<_> = (1..=50).map(summary).collect();
    let second_page: Vec<_> = (51..=69).map(summary).collect();
    let client = FakeDiscogsClient::new().with_pages(vec![first_page, second_page]);

    let search = criteria(4.0, false);
    let mut iterator = SearchResultsIterator::new(&client, &search);
    let summaries = iterator.collect_all().await.unwrap();

    assert_eq!(summaries.len(), 69);
    assert_eq!(iterator.total_results(), Some(69));
    assert_eq!(iterator.total_pages(), Some(2));
    let ids: Vec<u64> = summaries.iter().map(|s| s.id).collect();
    assert_eq!(ids, (1..=69).collect::<Vec<u64>>());

    // Exhausted iterators stay exhausted
    assert!(iterator.next().await.unwrap().is_none());
}

#[test_log::test(tokio::test)]
async fn no_videos_removes_video_releases_regardless_of_rating() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary_with_video(2), summary(3)]])
        .with_rating(1, 4.5, 5)
        .with_rating(2, 5.0, 5)
        .with_rating(3, 4.5, 5);

    let report = TopRatedSearch::new(client)
        .run(&criteria(4.0, true))
        .await
        .unwrap();

    let ids: Vec<u64> = report.releases.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test_log::test(tokio::test)]
async fn detail_video_count_feeds_the_no_videos_filter() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary(2)]])
        .with_detail(ReleaseDetail {
            id: 1,
            community_rating: 5.0,
            rating_count: 9,
            video_count: 2,
        })
        .with_rating(2, 5.0, 9);

    let report = TopRatedSearch::new(client)
        .run(&criteria(4.0, true))
        .await
        .unwrap();

    let ids: Vec<u64> = report.releases.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test_log::test(tokio::test)]
async fn unrated_release_never_qualifies_with_positive_threshold() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary(2)]])
        .with_rating(1, 0.0, 0) // detail parser maps a missing rating to 0.0
        .with_rating(2, 4.8, 20);

    let report = TopRatedSearch::new(client)
        .run(&criteria(0.5, false))
        .await
        .unwrap();

    let ids: Vec<u64> = report.releases.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test_log::test(tokio::test)]
async fn reported_total_comes_from_the_first_page() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary(2)]])
        .with_total(1234)
        .with_rating(1, 4.5, 1)
        .with_rating(2, 4.5, 1);

    let report = TopRatedSearch::new(client)
        .run(&criteria(4.0, false))
        .await
        .unwrap();

    assert_eq!(report.total_results, 1234);
    assert_eq!(report.releases.len(), 2);
}

#[test_log::test(tokio::test)]
async fn failed_page_fetch_aborts_the_run() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1)], vec![summary(2)]])
        .failing_search_on_page(2)
        .with_rating(1, 5.0, 1)
        .with_rating(2, 5.0, 1);

    let pipeline = TopRatedSearch::new(client);
    let result = pipeline.run(&criteria(4.0, false)).await;

    assert!(matches!(result, Err(DiscogsError::Api { status: 500, .. })));
    // The failure happened before any detail fetch
    assert!(!pipeline.client().call_kinds().iter().any(|k| k == "release"));
}

#[test_log::test(tokio::test)]
async fn failed_detail_fetch_aborts_the_run() {
    let client = FakeDiscogsClient::new()
        .with_pages(vec![vec![summary(1), summary(2)]])
        .with_rating(1, 5.0, 1); // no detail for release 2

    let result = TopRatedSearch::new(client).run(&criteria(4.0, false)).await;
    assert!(matches!(result, Err(DiscogsError::Api { status: 404, .. })));
}
