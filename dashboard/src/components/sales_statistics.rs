use models::api::stats::{DailySale, TopClients};
use yew::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING: f64 = 32.0;

#[derive(Properties, PartialEq)]
pub struct SalesStatisticsProps {
    pub daily_sales: Vec<DailySale>,
    pub top_clients: TopClients,
}

/// Chart coordinates for the daily totals, oldest date first.
fn chart_points(daily_sales: &[DailySale]) -> Vec<(f64, f64, String)> {
    let mut sales = daily_sales.to_vec();
    sales.sort_by(|a, b| a.sale_date.cmp(&b.sale_date));

    let max_total = sales.iter().map(|sale| sale.total).fold(0.0, f64::max);
    if max_total <= 0.0 {
        return Vec::new();
    }

    let step = if sales.len() > 1 {
        (WIDTH - 2.0 * PADDING) / (sales.len() - 1) as f64
    } else {
        0.0
    };

    sales
        .into_iter()
        .enumerate()
        .map(|(index, sale)| {
            let x = PADDING + step * index as f64;
            let y = HEIGHT - PADDING - (sale.total / max_total) * (HEIGHT - 2.0 * PADDING);
            (x, y, sale.sale_date)
        })
        .collect()
}

fn summary_card(title: &str, body: Option<String>) -> Html {
    html! {
        <div class="card">
            <h3>{title}</h3>
            <p>{body.unwrap_or_else(|| "N/A".to_string())}</p>
        </div>
    }
}

#[function_component(SalesStatistics)]
pub fn sales_statistics(props: &SalesStatisticsProps) -> Html {
    let points = chart_points(&props.daily_sales);

    let polyline = points
        .iter()
        .map(|(x, y, _)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    let chart = if points.is_empty() {
        html! { <p>{"No sales yet"}</p> }
    } else {
        html! {
            <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} class="sales-chart">
                <polyline points={polyline} fill="none" stroke="#1976d2" stroke-width="2" />
                { for points.iter().map(|(x, y, date)| html! {
                    <>
                        <circle cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="3" fill="#1976d2" />
                        <text x={format!("{x:.1}")} y={format!("{}", HEIGHT - 8.0)}
                            text-anchor="middle" font-size="10">{date}</text>
                    </>
                }) }
            </svg>
        }
    };

    let top = &props.top_clients;
    let volume = top
        .highest_volume
        .as_ref()
        .map(|client| format!("{}: $ {:.2}", client.name, client.total));
    let average = top
        .highest_average
        .as_ref()
        .map(|client| format!("{}: $ {:.2}", client.name, client.avg));
    let frequent = top
        .most_frequent
        .as_ref()
        .map(|client| format!("{}: {} day(s)", client.name, client.days));

    html! {
        <section class="sales-statistics">
            <h2>{"Sales statistics"}</h2>
            {chart}
            <div class="cards">
                {summary_card("Highest volume", volume)}
                {summary_card("Highest average", average)}
                {summary_card("Most frequent", frequent)}
            </div>
        </section>
    }
}
