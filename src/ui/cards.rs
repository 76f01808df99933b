/// Article card components

use yew::prelude::*;
use crate::article::Article;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: Article,
    /// Filterable cards carry the data attributes the filter engine reads.
    #[prop_or(false)]
    pub filterable: bool,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;

    let (categories, title, summary) = if props.filterable {
        (
            Some(article.joined_categories()),
            Some(article.title.clone()),
            Some(article.summary.clone()),
        )
    } else {
        (None, None, None)
    };

    html! {
        <a
            href={article.slug.clone()}
            class="article-card"
            style={props.style.clone()}
            data-categories={categories}
            data-title={title}
            data-summary={summary}
        >
            <h3>{&article.title}</h3>
            <div class="article-meta">
                <span>{format!("📅 {}", article.date)}</span>
                <span>{format!("⏱️ {}", article.read_time)}</span>
            </div>
            <p>{&article.summary}</p>
            <div class="article-tags">
                {for article.tags.iter().map(|tag| html! {
                    <span class="tag">{tag}</span>
                })}
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleListProps {
    pub articles: Vec<Article>,
    /// Fired once, after the cards are in the DOM.
    #[prop_or_default]
    pub on_rendered: Callback<usize>,
}

#[function_component(ArticleList)]
pub fn article_list(props: &ArticleListProps) -> Html {
    {
        let on_rendered = props.on_rendered.clone();
        let count = props.articles.len();
        use_effect_with((), move |_| {
            on_rendered.emit(count);
            || ()
        });
    }

    html! {
        <>
            {for props.articles.iter().map(|article| html! {
                <ArticleCard article={article.clone()} filterable={true} />
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LatestArticleProps {
    pub article: Article,
    pub listing_href: AttrValue,
}

#[function_component(LatestArticle)]
pub fn latest_article(props: &LatestArticleProps) -> Html {
    html! {
        <>
            <ArticleCard
                article={props.article.clone()}
                style={AttrValue::from("text-decoration: none; color: inherit;")}
            />
            <a
                href={props.listing_href.clone()}
                class="article-btn"
                style="margin-top: 1.5rem; display: inline-block;"
            >
                {"View All Articles"}
            </a>
        </>
    }
}
