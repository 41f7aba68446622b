//! Reference data shipped with the application.

use crate::models::CategoryId;

pub(crate) struct CategorySeed {
    pub id: CategoryId,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub(crate) struct LocationSeed {
    pub id: &'static str,
    pub category: CategoryId,
    pub title: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub description: &'static str,
    pub image: &'static str,
}

pub(crate) struct BlogSeed {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub(crate) const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        id: CategoryId::Iconic,
        title: "Famous landscapes and\nclassic wildlife",
        subtitle: "Iconic Wildlife Parks",
    },
    CategorySeed {
        id: CategoryId::Remote,
        title: "Remote, untouched\nwilderness",
        subtitle: "Remote & Wild Nature",
    },
    CategorySeed {
        id: CategoryId::Family,
        title: "Easy exploration and\nlearning",
        subtitle: "Family-Friendly & Discovery Parks",
    },
];

pub(crate) const LOCATIONS: &[LocationSeed] = &[
    LocationSeed {
        id: "banff",
        category: CategoryId::Iconic,
        title: "Banff National Park",
        lat: 51.4968,
        lng: -115.9281,
        description: "Banff is Canada’s oldest national park, known for its dramatic Rocky Mountain scenery and rich wildlife. Elk, bighorn sheep, black bears, and grizzly bears are commonly spotted throughout the park. Turquoise lakes, alpine forests, and mountain valleys create a perfect balance between accessibility and wild nature.",
        image: "banff.png",
    },
    LocationSeed {
        id: "jasper",
        category: CategoryId::Iconic,
        title: "Jasper National Park",
        lat: 52.8734,
        lng: -117.9543,
        description: "Jasper is one of the largest national parks in the Canadian Rockies. Its remote landscapes provide habitat for wolves, moose, caribou, and mountain goats. The park is also a designated Dark Sky Preserve, making wildlife encounters at dawn and dusk especially memorable.",
        image: "jasper.png",
    },
    LocationSeed {
        id: "algonquin",
        category: CategoryId::Iconic,
        title: "Algonquin Provincial Park",
        lat: 45.8372,
        lng: -78.3796,
        description: "Algonquin is famous for its forests, lakes, and canoe routes. It is one of the best places in Canada to see moose in the wild. Wolves, beavers, and loons are also key symbols of this park, which combines deep wilderness with a strong conservation history.",
        image: "algonquin.png",
    },
    LocationSeed {
        id: "pacific_rim",
        category: CategoryId::Iconic,
        title: "Pacific Rim National Park Reserve",
        lat: 48.6535,
        lng: -124.7256,
        description: "Located on Vancouver Island, this park protects rugged coastlines and ancient rainforests. Sea otters, whales, seals, and countless bird species thrive here. It offers a rare combination of marine and forest ecosystems in one protected area.",
        image: "pacific_rim.png",
    },
    LocationSeed {
        id: "gros_morne",
        category: CategoryId::Iconic,
        title: "Gros Morne National Park",
        lat: 49.6494,
        lng: -57.7516,
        description: "Gros Morne is known for its unique geology and dramatic fjords. Moose, foxes, and seabirds are commonly seen. The park tells a deep story of Earth’s formation while also preserving fragile northern ecosystems.",
        image: "gros_morne.png",
    },
    LocationSeed {
        id: "nahanni",
        category: CategoryId::Remote,
        title: "Nahanni National Park Reserve",
        lat: 61.5544,
        lng: -125.785,
        description: "Nahanni is famous for its deep canyons, powerful waterfalls, and remote wilderness. Dall sheep, wolves, and grizzly bears inhabit this rugged region. It is one of Canada’s most untouched and awe-inspiring parks.",
        image: "nahanni.png",
    },
    LocationSeed {
        id: "auyuittuq",
        category: CategoryId::Remote,
        title: "Auyuittuq National Park",
        lat: 67.8735,
        lng: -65.282,
        description: "Auyuittuq means “the land that never melts.” This Arctic park features glaciers, fjords, and polar wildlife. Arctic foxes and seabirds dominate the landscape, offering a rare glimpse into life in extreme environments.",
        image: "auyuittuq.png",
    },
    LocationSeed {
        id: "wood_buffalo",
        category: CategoryId::Remote,
        title: "Wood Buffalo National Park",
        lat: 59.305,
        lng: -112.4146,
        description: "This is Canada’s largest national park and a key refuge for wood bison. It also protects the nesting grounds of endangered whooping cranes. Vast wetlands and boreal forests define this remote ecosystem.",
        image: "wood_buffalo.png",
    },
    LocationSeed {
        id: "kluane",
        category: CategoryId::Remote,
        title: "Kluane National Park",
        lat: 60.7212,
        lng: -137.5117,
        description: "Home to Canada’s highest mountains and massive icefields, Kluane supports grizzly bears, wolves, and Dall sheep. Its landscapes are raw, powerful, and largely untouched by modern development.",
        image: "kluane.png",
    },
    LocationSeed {
        id: "torngat",
        category: CategoryId::Remote,
        title: "Torngat Mountains National Park",
        lat: 58.734,
        lng: -63.7558,
        description: "This northern park features dramatic mountains rising directly from the sea. Polar bears, caribou, and Arctic wildlife roam freely. The park is co-managed with Indigenous communities, blending nature and cultural heritage.",
        image: "torngat.png",
    },
    LocationSeed {
        id: "riding_mountain",
        category: CategoryId::Family,
        title: "Riding Mountain National Park",
        lat: 50.9906,
        lng: -99.85,
        description: "Riding Mountain sits at the meeting point of prairie, forest, and wetland ecosystems. Bison, elk, and deer are commonly seen. It’s an excellent park for learning about ecosystem diversity in one location.",
        image: "riding_mountain.png",
    },
    LocationSeed {
        id: "pei",
        category: CategoryId::Family,
        title: "Prince Edward Island National Park",
        lat: 46.4167,
        lng: -63.0833,
        description: "This coastal park protects red sandstone cliffs, dunes, and beaches. Foxes, seabirds, and marine life define the area. Its gentle trails and open landscapes make it ideal for relaxed exploration.",
        image: "pei.png",
    },
    LocationSeed {
        id: "fundy",
        category: CategoryId::Family,
        title: "Fundy National Park",
        lat: 45.5987,
        lng: -64.95,
        description: "Fundy is known for the world’s highest tides. Forest animals like deer and black bears live alongside dramatic coastal ecosystems. The park combines geology, wildlife, and scenic hiking trails.",
        image: "fundy.png",
    },
    LocationSeed {
        id: "point_pelee",
        category: CategoryId::Family,
        title: "Point Pelee National Park",
        lat: 41.9616,
        lng: -82.5186,
        description: "Point Pelee is a major bird migration hotspot. Hundreds of bird species pass through every year. Its small size makes wildlife observation easy and rewarding, especially in spring and fall.",
        image: "point_pelee.png",
    },
    LocationSeed {
        id: "waterton",
        category: CategoryId::Family,
        title: "Waterton Lakes National Park",
        lat: 49.052,
        lng: -113.915,
        description: "Where prairies meet the Rocky Mountains, Waterton offers diverse habitats in a compact area. Bears, deer, and birds thrive here. The park is also part of an international peace park with the USA.",
        image: "waterton.png",
    },
];

pub(crate) const BLOG_POSTS: &[BlogSeed] = &[
    BlogSeed {
        id: "1",
        title: "The Day I Learned to Walk Slower",
        body: "The first lesson the parks taught me was not about animals, maps, or safety.\nIt was about speed.\n\nI remember walking through a forest trail in Banff, focused on reaching a viewpoint I had seen online. My steps were fast, my mind already ahead of my body. I passed trees without noticing their shapes, ignored sounds I couldn’t immediately identify, and missed movements at the edge of my vision.\n\nThen I stopped — not by choice, but because something moved nearby. A deer stepped onto the trail, close enough that I could hear its breathing. It wasn’t afraid. It simply waited. That moment stretched longer than any photograph could capture.\n\nI realized then that wildlife doesn’t reward urgency.\nIt rewards presence.\n\nSince that day, I walk slower. Not to see more — but to be more aware.",
    },
    BlogSeed {
        id: "2",
        title: "Wolves Are Teachers, Not Performers",
        body: "Many visitors ask me why wolves are so hard to see. They imagine wolves as dramatic figures, appearing on ridgelines or crossing open valleys. The truth is quieter.\n\nIn Jasper National Park, wolves watch more than they move. They observe from distance, following patterns humans rarely notice. A rustle of leaves, a shift in wind direction, a pause in bird calls — these are signals wolves understand deeply.\n\nOne evening, I realized we were being watched. Not because I saw the wolves, but because everything else had gone still. That silence wasn’t empty — it was alert.\n\nWolves don’t need to be seen to shape the land. Their presence alone keeps ecosystems balanced. Sometimes the most powerful animals are the ones you never encounter directly.",
    },
    BlogSeed {
        id: "3",
        title: "The Weight of a Bear’s Gaze",
        body: "I once watched a bear from far across a meadow. The distance felt safe, respectful. The bear fed slowly, pulling roots from the ground with careful strength.\n\nAnother visitor didn’t understand that distance. They stepped closer, camera raised, excitement louder than awareness. The bear stopped. Its head lifted. Its eyes locked forward.\n\nThat moment changed the air completely.\n\nNothing happened — because we backed away. But the message was clear. A bear’s calm is not permission. It is tolerance.\n\nParks teach humility. Wildlife reminds us that being allowed nearby is a privilege, not a right.",
    },
    BlogSeed {
        id: "4",
        title: "When the Forest Speaks at Night",
        body: "At night in Algonquin Park, the forest becomes a different place. Sounds travel farther. Shapes dissolve. Human senses weaken, while wildlife grows confident.\n\nI remember sitting near a lake when the first wolf howl echoed across the water. Then another. Then silence. The sound didn’t feel aggressive — it felt like communication older than language.\n\nThat howl wasn’t meant for me.\nI was simply allowed to hear it.\n\nNighttime reminds us that parks do not belong to daytime visitors alone. Life continues long after trails empty.",
    },
    BlogSeed {
        id: "5",
        title: "Where Land Ends and Water Begins",
        body: "Pacific Rim National Park taught me that boundaries are illusions. Forest trails lead suddenly to open ocean. Tree roots hold cliffs together while waves reshape them daily.\n\nI once watched sea otters floating calmly while ancient trees stood motionless behind me. Two worlds touching without conflict.\n\nParks like this remind us that ecosystems are not separate chapters — they are overlapping stories.",
    },
    BlogSeed {
        id: "6",
        title: "Weather Is Never Just Weather",
        body: "In Jasper, storms arrive without warning. Clouds gather fast, shadows stretch, and temperatures drop.\n\nOne afternoon, I watched animals react before the first rain fell. Elk moved closer to forest edges. Birds stopped calling. Even insects disappeared.\n\nNature always knows before we do.\n\nWeather isn’t background. It’s a force shaping every decision in the wild.",
    },
    BlogSeed {
        id: "7",
        title: "Beavers Change Everything Quietly",
        body: "Beavers don’t seek attention. They don’t announce their work. But entire wetlands exist because of them.\n\nIn Riding Mountain National Park, following a beaver dam means following life. Birds nest nearby. Fish gather. Plants flourish.\n\nOne species can redesign an ecosystem — not through dominance, but through persistence.",
    },
    BlogSeed {
        id: "8",
        title: "Silence Is a Resource",
        body: "Caribou don’t survive noise. They need large, undisturbed spaces. Every road, every trail, every sound matters.\n\nIn remote parks, silence is protected like water or land. When you walk quietly, you become part of conservation.\n\nSometimes doing less is the most powerful action.",
    },
    BlogSeed {
        id: "9",
        title: "Winter Writes Its Own Stories",
        body: "When snow falls, the parks reveal new narratives. Tracks appear overnight. Trails erase themselves.\n\nIn Waterton Lakes, I once followed animal tracks until the wind erased them completely. The story ended before I reached its conclusion.\n\nWinter teaches impermanence.",
    },
    BlogSeed {
        id: "10",
        title: "The Land That Never Melts",
        body: "Auyuittuq feels ancient. Glaciers move slowly, shaping valleys over lifetimes longer than ours.\n\nStanding there reminds you how brief human presence really is. Life survives here — quietly, persistently.\n\nResilience doesn’t always look dramatic. Sometimes it looks patient.",
    },
    BlogSeed {
        id: "11",
        title: "Migration Is Memory",
        body: "At Point Pelee, birds return every year without maps. They remember routes written into instinct.\n\nWatching migration feels like witnessing collective memory passed across generations.",
    },
    BlogSeed {
        id: "12",
        title: "Old Forests Don’t Hurry",
        body: "In Pacific Rim, trees grow slowly, shaped by wind and salt. They bend instead of breaking.\n\nThese forests don’t rush — and neither should we.",
    },
    BlogSeed {
        id: "13",
        title: "The Return of the Bison",
        body: "Wood Buffalo tells a story of recovery. Bison nearly disappeared. Protection brought them back.\n\nConservation is slow. But it works.",
    },
    BlogSeed {
        id: "14",
        title: "Small Lives Hold Big Systems",
        body: "Insects keep parks alive. Pollination, soil health, food chains — all depend on what we rarely notice.\n\nNature’s strength is collective.",
    },
    BlogSeed {
        id: "15",
        title: "Darkness Protects Life",
        body: "In dark-sky parks, animals behave naturally. Stars return. Night becomes safe again.\n\nDarkness is not absence. It is balance.",
    },
    BlogSeed {
        id: "16",
        title: "Closed Trails Tell Important Stories",
        body: "Closures protect nesting grounds and migration paths. When access is limited, life continues undisturbed.\n\nRespecting closures means choosing wildlife over convenience.",
    },
    BlogSeed {
        id: "17",
        title: "Water Shapes Every Decision",
        body: "Rivers guide movement. Tides reshape coasts.\n\nWater designs landscapes patiently.",
    },
    BlogSeed {
        id: "18",
        title: "Leaving Is Part of Visiting",
        body: "The best visit leaves nothing behind — not even proof you were there.",
    },
    BlogSeed {
        id: "19",
        title: "Every Park Has Its Own Rhythm",
        body: "Some wake early. Some come alive at dusk.\n\nListening is more important than searching.",
    },
    BlogSeed {
        id: "20",
        title: "Why I Guide",
        body: "I guide to help people slow down.\nNot to show places — but to teach presence.\n\nThe wild doesn’t need us.\nBut it allows us to learn.",
    },
];

pub(crate) const WILD_FACTS: &[&str] = &[
    "Canada has over 40 national parks protecting wildlife and landscapes.",
    "Banff National Park is Canada’s oldest national park, founded in 1885.",
    "Canada is home to more than 70,000 species of plants and animals.",
    "Moose can weigh over 600 kg and are excellent swimmers.",
    "Grizzly bears can run as fast as a horse for short distances.",
    "Woodland caribou rely on old-growth forests to survive.",
    "Gray wolves play a key role in keeping ecosystems balanced.",
    "Jasper National Park is one of the world’s largest dark-sky preserves.",
    "Beavers, Canada’s national animal, shape entire ecosystems with dams.",
    "Polar bears spend most of their lives on sea ice, not land.",
    "Algonquin Park protects over 1,000 lakes and rivers.",
    "Bald eagles can spot prey from over 3 km away.",
    "Pacific Rim National Park is home to ancient coastal rainforests.",
    "Lynx have large paws that act like snowshoes in winter.",
    "Orcas can be found along Canada’s Pacific coastline.",
    "Elk shed and regrow their antlers every year.",
    "Gros Morne National Park reveals rocks from Earth’s mantle.",
    "Snowy owls migrate south to Canada’s parks during winter.",
    "Parks Canada protects nearly 500,000 km² of natural areas.",
    "Many Canadian parks help protect endangered species and habitats.",
];
