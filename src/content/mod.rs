//! Content strategy for blog generation: themes, topics, and messaging.
//! Update the tables here to change what gets covered without touching
//! the generator.

use rand::seq::SliceRandom;
use rand::Rng;

/// A content category: display name, selection weight, and its topic pool.
pub struct Category {
    pub name: &'static str,
    pub weight: u32,
    pub topics: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Hot Crypto Topics",
        weight: 25,
        topics: &[
            "Why crypto veterans are looking beyond Ethereum for the next cycle",
            "The real-world asset revolution: Why RWA tokens are the next big thing",
            "Bitcoin ETF impact: What it means for altcoin season",
            "Memecoin mania vs utility tokens: Where smart money is moving",
            "Layer 1 wars: Which blockchain will dominate 2025",
            "Cross-chain future: Why interoperability matters more than ever",
            "Institutional crypto adoption: The quiet revolution happening now",
            "DeFi 2.0: What the next generation of decentralized finance looks like",
            "NFT utility beyond art: Real use cases emerging in 2025",
            "Crypto regulation clarity: How compliant chains will win",
            "The speed race: Why transaction finality matters for adoption",
            "Gas fee crisis: Chains solving the cost problem",
            "Staking rewards comparison: Where to earn the best yields",
            "Crypto gaming renaissance: Which chains are winning",
            "AI meets blockchain: The convergence everyone's watching",
        ],
    },
    Category {
        name: "Chain Migration Stories",
        weight: 20,
        topics: &[
            "From Ethereum to Cosmos: A developer's journey to lower fees",
            "Why Solana traders are exploring Cosmos ecosystem alternatives",
            "Bitcoin maxis discovering smart contract capabilities",
            "SUI vs Coreum: An honest comparison for new builders",
            "Ethereum bridge fatigue: Native IBC as the solution",
            "What Solana's outages taught us about blockchain architecture",
            "Moving from high-gas chains: A step-by-step mental framework",
            "The multi-chain future: Why you shouldn't be chain-loyal",
            "Layer 2 exhaustion: When L1 simplicity makes more sense",
            "Cross-chain portfolio strategy for the modern investor",
        ],
    },
    Category {
        name: "Real World Assets & Enterprise",
        weight: 20,
        topics: &[
            "Real estate on blockchain: How tokenization is democratizing property investment",
            "Commodity tokenization: Gold, oil, and beyond on Coreum",
            "Why enterprises choose compliant-first blockchains",
            "KYC-ready tokens: The future of regulated crypto",
            "Supply chain transparency: Blockchain's killer enterprise use case",
            "Fractional ownership revolution: Invest in anything with $10",
            "Carbon credits on chain: Environmental assets going digital",
            "Art tokenization: Making museum pieces accessible to everyone",
            "Invoice financing meets DeFi: Real business applications",
            "Smart Tokens explained: Coreum's approach to programmable assets",
        ],
    },
    Category {
        name: "Cosmos Ecosystem",
        weight: 15,
        topics: &[
            "IBC protocol: The internet of blockchains explained",
            "Cosmos airdrops: How to position for the next big drop",
            "Interchain security: Shared security across Cosmos",
            "Top Cosmos chains to watch in 2025",
            "Staking across Cosmos: Maximizing your rewards",
            "Cosmos vs Polkadot vs Avalanche: Interoperability showdown",
            "The Cosmos Hub roadmap: What's coming next",
            "AppChain thesis: Why application-specific blockchains win",
            "Liquid staking in Cosmos: Options and opportunities",
            "Cosmos governance: How decisions get made on-chain",
        ],
    },
    Category {
        name: "Security & Best Practices",
        weight: 10,
        topics: &[
            "Crypto security checklist for 2025",
            "Hardware wallet vs software wallet: Making the right choice",
            "Phishing attacks in crypto: How to protect yourself",
            "Smart contract risks: What to check before interacting",
            "Seed phrase security: The ultimate guide",
            "DeFi rug pull red flags every investor should know",
            "Bridge security: Safest ways to move assets cross-chain",
            "Recovery planning: Don't lose access to your crypto",
        ],
    },
    Category {
        name: "Investment & Trading",
        weight: 10,
        topics: &[
            "Bull market preparation: Portfolio positioning strategies",
            "Altcoin season indicators: What to watch for",
            "Dollar-cost averaging in crypto: A stress-free approach",
            "Yield farming strategies for risk-adjusted returns",
            "Token unlocks and vesting: Impact on price action",
            "Crypto tax strategies: Minimize your burden legally",
            "Market cycles: Historical patterns and future predictions",
            "Risk management in volatile markets",
        ],
    },
];

/// Core value propositions for Coreum, woven into prompts two at a time.
pub const VALUE_PROPS: &[&str] = &[
    "Coreum processes 7,000+ TPS with 1-second finality - faster than Ethereum, Solana, and most L1s",
    "Near-zero gas fees make Coreum perfect for everyday transactions and micro-payments",
    "Built-in Smart Tokens enable compliant real-world asset tokenization without complex smart contracts",
    "Enterprise-grade security with deterministic gas and built-in compliance features",
    "IBC-enabled for seamless cross-chain transfers across the Cosmos ecosystem",
    "Designed for institutional adoption with KYC/AML compliance built into the protocol",
];

/// Comparison talking points (friendly, factual, not FUD)
pub struct ChainComparison {
    pub chain: &'static str,
    pub respect: &'static str,
    pub limitation: &'static str,
    pub coreum_solution: &'static str,
}

pub const CHAIN_COMPARISONS: &[ChainComparison] = &[
    ChainComparison {
        chain: "bitcoin",
        respect: "Bitcoin pioneered cryptocurrency and remains the gold standard for store of value",
        limitation: "Bitcoin wasn't designed for fast, cheap everyday transactions or smart contracts",
        coreum_solution: "Coreum brings Bitcoin-level security with modern transaction speeds and programmability",
    },
    ChainComparison {
        chain: "ethereum",
        respect: "Ethereum created the smart contract revolution and hosts the largest DeFi ecosystem",
        limitation: "High gas fees and network congestion make Ethereum challenging for everyday users",
        coreum_solution: "Coreum offers Ethereum-like programmability with predictable, near-zero fees",
    },
    ChainComparison {
        chain: "solana",
        respect: "Solana pushed the boundaries of blockchain speed and attracted massive adoption",
        limitation: "Network outages and centralization concerns have raised questions about reliability",
        coreum_solution: "Coreum matches Solana's speed with battle-tested Cosmos SDK reliability",
    },
    ChainComparison {
        chain: "sui",
        respect: "SUI brings innovative object-centric architecture and parallel execution",
        limitation: "New ecosystem still building liquidity and developer tools",
        coreum_solution: "Coreum leverages the mature Cosmos ecosystem with instant IBC liquidity access",
    },
];

// Brand voice and messaging guidelines
pub const BRAND_TONE: &str =
    "Friendly, knowledgeable, and helpful - never aggressive or FUD-spreading";
pub const BRAND_APPROACH: &str = "Educate and inform rather than hard-sell";
pub const BRAND_CTA: &str =
    "Subtle mentions of SHIELDNEST and Coreum benefits without being pushy";
pub const BRAND_COMPETITORS: &str =
    "Respectful of other chains while highlighting Coreum advantages";

/// SEO keywords to incorporate
pub const SEO_KEYWORDS: &[&str] = &[
    "Coreum blockchain",
    "SHIELDNEST",
    "real world assets",
    "RWA tokenization",
    "Cosmos ecosystem",
    "IBC protocol",
    "low gas fees",
    "fast transactions",
    "enterprise blockchain",
    "compliant crypto",
    "smart tokens",
    "cross-chain",
    "crypto security",
    "DeFi",
    "staking rewards",
    "blockchain interoperability",
];

/// Weighted random category draw: cumulative-weight scan against
/// `total * uniform(0,1)`, falling back to the first category.
pub fn select_weighted_category<R: Rng>(rng: &mut R) -> &'static Category {
    let total: u32 = CATEGORIES.iter().map(|c| c.weight).sum();
    let mut draw = rng.gen::<f64>() * total as f64;

    for category in CATEGORIES {
        draw -= category.weight as f64;
        if draw <= 0.0 {
            return category;
        }
    }

    &CATEGORIES[0]
}

/// Uniform topic pick. `None` when the category's topic pool is empty.
pub fn random_topic<R: Rng>(rng: &mut R, category: &Category) -> Option<&'static str> {
    category.topics.choose(rng).copied()
}

pub fn random_value_props<R: Rng>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut props: Vec<&'static str> = VALUE_PROPS.to_vec();
    props.shuffle(rng);
    props.truncate(count);
    props
}

pub fn random_comparison<R: Rng>(rng: &mut R) -> &'static ChainComparison {
    &CHAIN_COMPARISONS[rng.gen_range(0..CHAIN_COMPARISONS.len())]
}

pub fn random_keywords<R: Rng>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = SEO_KEYWORDS.to_vec();
    keywords.shuffle(rng);
    keywords.truncate(count);
    keywords
}
