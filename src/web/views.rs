use crate::core::storage::models::NewsRecord;

pub const EMPTY_QUERY_MESSAGE: &str =
    "<div>You insert nothing for searching. Try to reload page or change query.</div>";
pub const NOTHING_FOUND_MESSAGE: &str =
    "<div>Nothing found :c. Try to reload page or change query.</div>";

/// One fragment per record; the same markup serves the index page and the
/// raw search response.
pub fn render_items(records: &[NewsRecord]) -> String {
    records
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_item(record: &NewsRecord) -> String {
    format!(
        r#"<div class="news-container">
    <div class="news">
        <a class="news-ref" href="{link}">{title}</a>
        <p>{description}</p>
        <p class="news-time">{date}</p>
    </div>
</div>"#,
        link = record.link,
        title = record.title,
        description = record.description,
        date = record.date,
    )
}

pub fn render_index(records: &[NewsRecord]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>newsaggr</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <h1>newsaggr</h1>
    <div class="controls">
        <form class="search-form" action="/search" method="get">
            <input type="text" name="name" placeholder="Search by title">
            <button type="submit">Search</button>
        </form>
        <form class="run-form" action="/run" method="post">
            <select name="algo">
                <option value="1">Mail.ru front page</option>
                <option value="2">Yandex front page</option>
                <option value="3">Mail feed (needs url)</option>
                <option value="4">Yandex feed (needs url)</option>
            </select>
            <input type="text" name="site" placeholder="Feed url for 3/4">
            <button type="submit">Run</button>
        </form>
        <form class="drop-form" action="/drop" method="post">
            <button type="submit">Drop everything</button>
        </form>
    </div>
    <p class="count">{count} stored items shown</p>
    {items}
</body>
</html>"#,
        count = records.len(),
        items = render_items(records),
    )
}
