use crate::model::{Difficulty, ImageRef, QuestionDraft};

fn question(
    id: &str,
    difficulty: Difficulty,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    fact: &str,
    image: Option<(&str, &str)>,
) -> QuestionDraft {
    QuestionDraft {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|opt| (*opt).to_string()).collect(),
        correct_index,
        fact: fact.to_string(),
        difficulty,
        image: image.map(|(src, alt)| ImageRef::new(src).with_alt(alt)),
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn drafts() -> Vec<QuestionDraft> {
    use Difficulty::{Easy, Hard, Medium};

    vec![
        // Easy: countries and capitals
        question(
            "e1",
            Easy,
            "What is the capital of Brazil?",
            ["Rio de Janeiro", "São Paulo", "Brasília", "Salvador"],
            2,
            "Brazil’s capital is Brasília, inaugurated in 1960 to promote development in the interior.",
            None,
        ),
        question(
            "e2",
            Easy,
            "What is the capital of Canada?",
            ["Toronto", "Vancouver", "Ottawa", "Montreal"],
            2,
            "Ottawa sits on the Ottawa River and is home to Canada’s Parliament Hill.",
            None,
        ),
        question(
            "e3",
            Easy,
            "What is the capital of Germany?",
            ["Munich", "Hamburg", "Berlin", "Frankfurt"],
            2,
            "Berlin, once divided by a wall, is now a major European cultural and tech hub.",
            None,
        ),
        question(
            "e4",
            Easy,
            "What is the capital of India?",
            ["Mumbai", "New Delhi", "Kolkata", "Bengaluru"],
            1,
            "New Delhi was designed by British architects Edwin Lutyens and Herbert Baker.",
            None,
        ),
        question(
            "e5",
            Easy,
            "What is the capital of Australia?",
            ["Sydney", "Melbourne", "Perth", "Canberra"],
            3,
            "Canberra was chosen as a compromise between Sydney and Melbourne in 1908.",
            None,
        ),
        // Medium: flags and landmarks
        question(
            "m1",
            Medium,
            "Which country has this flag?",
            ["Japan", "South Korea", "China", "Vietnam"],
            0,
            "Japan’s flag, the Hinomaru, features a red circle symbolizing the sun.",
            Some(("flags/jp.png", "Flag of Japan")),
        ),
        question(
            "m2",
            Medium,
            "Which country has this flag?",
            ["Portugal", "Spain", "Brazil", "Mexico"],
            2,
            "Brazil’s flag features a starry globe with the motto “Ordem e Progresso.”",
            Some(("flags/br.png", "Flag of Brazil")),
        ),
        question(
            "m3",
            Medium,
            "Which country has this flag?",
            ["Germany", "Belgium", "Austria", "Netherlands"],
            0,
            "Germany’s flag uses horizontal black, red, and gold stripes, symbolizing unity and freedom.",
            Some(("flags/de.png", "Flag of Germany")),
        ),
        question(
            "m4",
            Medium,
            "The Eiffel Tower is located in which city?",
            ["Rome", "Paris", "Madrid", "Vienna"],
            1,
            "The Eiffel Tower was built for the 1889 World’s Fair and was once the tallest structure on Earth.",
            None,
        ),
        question(
            "m5",
            Medium,
            "The Great Barrier Reef lies off the coast of which country?",
            ["South Africa", "Australia", "Indonesia", "New Zealand"],
            1,
            "The Great Barrier Reef is the world’s largest coral reef system, visible from space.",
            Some(("flags/au.png", "Flag of Australia")),
        ),
        question(
            "m6",
            Medium,
            "Which country has this flag?",
            ["France", "Italy", "Netherlands", "Luxembourg"],
            0,
            "France’s tricolor flag of blue, white, and red dates back to the French Revolution.",
            Some(("flags/fr.png", "Flag of France")),
        ),
        // Hard: map-style location
        question(
            "h1",
            Hard,
            "Which country is an island nation in East Asia known as the “Land of the Rising Sun”?",
            ["Philippines", "Japan", "Taiwan", "Indonesia"],
            1,
            "Japan consists of four main islands (Honshu, Hokkaido, Kyushu, and Shikoku) and many smaller ones.",
            Some(("flags/jp.png", "Flag hint for Japan")),
        ),
        question(
            "h2",
            Hard,
            "Which country forms a boot-shaped peninsula extending into the Mediterranean Sea?",
            ["Greece", "Italy", "Turkey", "Croatia"],
            1,
            "Italy’s distinctive shape is easily spotted on maps; its capital is Rome.",
            None,
        ),
        question(
            "h3",
            Hard,
            "Which country lies to the east of China across the Sea of Japan?",
            ["South Korea", "Japan", "Russia", "Mongolia"],
            1,
            "Japan’s main islands arc along the Pacific “Ring of Fire,” leading to frequent seismic activity.",
            None,
        ),
        question(
            "h4",
            Hard,
            "Which country is landlocked between Spain and France in the Pyrenees?",
            ["Liechtenstein", "Andorra", "Monaco", "San Marino"],
            1,
            "Andorra is a microstate known for ski resorts and duty-free shopping.",
            None,
        ),
        question(
            "h5",
            Hard,
            "Which African country lies along the equator and is famous for the Maasai Mara reserve?",
            ["Kenya", "Ghana", "Ethiopia", "Tanzania"],
            0,
            "Kenya’s Great Rift Valley and savannas host diverse wildlife, including the “Big Five.”",
            Some(("flags/ke.png", "Flag hint for Kenya")),
        ),
        question(
            "h6",
            Hard,
            "Which country’s capital, Ottawa, lies in the province of Ontario near Quebec?",
            ["United States", "Canada", "Iceland", "Norway"],
            1,
            "Canada spans six time zones and is the world’s second-largest country by area.",
            Some(("flags/ca.png", "Flag hint for Canada")),
        ),
    ]
}
