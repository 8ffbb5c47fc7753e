//! Sample sentence pools, one per category and language.
//!
//! The built-in table is initialised once and shared read-only. Generators
//! receive a pool at construction, so tests can inject a smaller one.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::{FillError, FillResult};

/// Topical bucket selecting which sample sentences are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Software, devices, the internet.
    Technology,
    /// Management, markets, operations.
    Business,
    /// Fitness, medicine, wellbeing.
    Health,
    /// Climate and conservation.
    Environment,
    /// Film, music, streaming.
    Entertainment,
    /// Money and investing.
    Finance,
    /// Video games and esports.
    Gaming,
    /// Social media and online communities.
    Social,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Business,
        Category::Health,
        Category::Environment,
        Category::Entertainment,
        Category::Finance,
        Category::Gaming,
        Category::Social,
    ];

    /// Lowercase identifier used in configs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Health => "health",
            Category::Environment => "environment",
            Category::Entertainment => "entertainment",
            Category::Finance => "finance",
            Category::Gaming => "gaming",
            Category::Social => "social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| FillError::UnknownCategory(s.to_string()))
    }
}

/// Language of the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Arabic.
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" => Ok(Language::Arabic),
            _ => Err(FillError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Immutable mapping from (category, language) to sample sentences.
#[derive(Debug, Clone, Default)]
pub struct SamplePool {
    entries: HashMap<(Category, Language), Vec<String>>,
}

static BUILTIN: LazyLock<Arc<SamplePool>> = LazyLock::new(|| {
    let mut pool = SamplePool::default();
    for (language, table) in [(Language::English, &ENGLISH), (Language::Arabic, &ARABIC)] {
        for (category, sentences) in table {
            pool = pool.with_entries(*category, language, sentences.iter().copied());
        }
    }
    Arc::new(pool)
});

impl SamplePool {
    /// The pool shipped with the crate: eight categories in English and Arabic.
    #[must_use]
    pub fn builtin() -> Arc<SamplePool> {
        Arc::clone(&BUILTIN)
    }

    /// Replace the sentences for one category and language.
    #[must_use]
    pub fn with_entries<I, S>(
        mut self,
        category: Category,
        language: Language,
        sentences: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            (category, language),
            sentences.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Sentences for a category and language, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::EmptyPool`] if the combination has no entries.
    pub fn pool_for(&self, category: Category, language: Language) -> FillResult<&[String]> {
        match self.entries.get(&(category, language)) {
            Some(sentences) if !sentences.is_empty() => Ok(sentences),
            _ => Err(FillError::EmptyPool { category, language }),
        }
    }
}

const ENGLISH: [(Category, [&str; 5]); 8] = [
    (
        Category::Technology,
        [
            "Many startups today are interested in e-commerce and mobile application development. Innovation in these areas opens new horizons for businesses.",
            "Artificial intelligence and machine learning are revolutionizing how we approach problem-solving in technology. These tools enable more efficient data analysis.",
            "Cloud computing has transformed how businesses store and process data. Scalability and flexibility are key advantages of cloud-based solutions.",
            "Cybersecurity remains a critical concern for organizations of all sizes. Protecting sensitive data requires a comprehensive approach to security.",
            "The Internet of Things connects everyday devices to the web, creating smart homes and efficient workplaces. This technology continues to evolve rapidly.",
        ],
    ),
    (
        Category::Business,
        [
            "Effective leadership requires strategic thinking and adaptability. Successful businesses focus on customer satisfaction and continuous improvement.",
            "Market research provides valuable insights into consumer preferences and behavior. Companies use this data to refine their product offerings.",
            "Supply chain management has become increasingly complex in the global economy. Efficiency in this area can significantly impact profitability.",
            "Corporate social responsibility initiatives demonstrate a company's commitment to ethical practices. These programs can enhance brand reputation.",
            "Remote work has changed how businesses operate and collaborate. Many organizations are adopting hybrid models to accommodate employee preferences.",
        ],
    ),
    (
        Category::Health,
        [
            "Regular exercise and balanced nutrition contribute to overall wellbeing. Mental health awareness has increased significantly in recent years.",
            "Preventive healthcare focuses on maintaining wellness rather than treating illness. Regular screenings and checkups are essential components.",
            "Telemedicine has expanded access to healthcare services, particularly in rural areas. This technology continues to evolve and improve.",
            "Stress management techniques such as meditation and mindfulness can improve both mental and physical health outcomes.",
            "Sleep quality significantly impacts overall health and cognitive function. Establishing consistent sleep patterns is crucial for wellbeing.",
        ],
    ),
    (
        Category::Environment,
        [
            "Climate change presents significant challenges for our planet. Sustainable practices and renewable energy sources are essential for our future.",
            "Conservation efforts aim to protect biodiversity and preserve natural habitats. These initiatives require both local and global cooperation.",
            "Reducing plastic waste is a priority for environmental protection. Many communities are implementing recycling programs and bans on single-use plastics.",
            "Sustainable agriculture practices focus on minimizing environmental impact while maintaining productivity. These methods can help preserve soil health.",
            "Water conservation is becoming increasingly important as many regions face shortages. Simple changes in daily habits can make a significant difference.",
        ],
    ),
    (
        Category::Entertainment,
        [
            "The entertainment industry continues to evolve with streaming platforms. Digital content creation has transformed how we consume media.",
            "Virtual reality offers immersive experiences for gaming and entertainment. This technology continues to advance and become more accessible.",
            "Independent filmmakers now have more platforms to showcase their work. Streaming services have created opportunities for diverse storytelling.",
            "Music streaming has changed how artists release and promote their work. The industry continues to adapt to these technological changes.",
            "Interactive entertainment blurs the line between passive viewing and active participation. This trend is likely to continue with advancing technology.",
        ],
    ),
    (
        Category::Finance,
        [
            "Financial literacy is crucial for personal and business success. Investment strategies should be tailored to individual goals and risk tolerance.",
            "Cryptocurrency and blockchain technology are changing traditional financial systems. Understanding these innovations is becoming increasingly important.",
            "Retirement planning requires long-term strategy and consistent saving. Starting early provides significant advantages through compound growth.",
            "Diversification helps manage investment risk by spreading assets across different categories. This strategy can provide more stable returns over time.",
            "Personal budgeting is the foundation of financial health. Tracking expenses and setting realistic goals can lead to greater financial security.",
        ],
    ),
    (
        Category::Gaming,
        [
            "The gaming industry has seen tremendous growth in recent years. Esports competitions now attract millions of viewers worldwide.",
            "Mobile gaming has expanded the market to casual players. These accessible games have broad appeal across different demographics.",
            "Game development tools have become more accessible to independent creators. This has led to an increase in unique and innovative games.",
            "Virtual reality gaming creates immersive experiences that were previously impossible. This technology continues to evolve and improve.",
            "Gaming communities provide social connections and shared experiences. Many players value these interactions as much as the games themselves.",
        ],
    ),
    (
        Category::Social,
        [
            "Social media platforms have transformed how we communicate. Digital marketing strategies must adapt to changing user behaviors and preferences.",
            "Online communities bring together people with shared interests regardless of geographic location. These connections can be valuable sources of support.",
            "Digital communication tools have enabled remote collaboration and relationship maintenance. These technologies became essential during global lockdowns.",
            "Content creation has become more accessible with smartphone technology. Many individuals now share their perspectives and creativity online.",
            "Social networking has changed how we maintain relationships and share information. Understanding these platforms is increasingly important in modern society.",
        ],
    ),
];

const ARABIC: [(Category, [&str; 5]); 8] = [
    (
        Category::Technology,
        [
            "تهتم العديد من الشركات الناشئة اليوم بالتجارة الإلكترونية وتطوير تطبيقات الهاتف المحمول. يفتح الابتكار في هذه المجالات آفاقًا جديدة للأعمال.",
            "الذكاء الاصطناعي والتعلم الآلي يغيران طريقة تعاملنا مع حل المشكلات في مجال التكنولوجيا. تمكن هذه الأدوات من تحليل البيانات بكفاءة أكبر.",
            "غيرت الحوسبة السحابية طريقة تخزين الشركات للبيانات ومعالجتها. تعد قابلية التوسع والمرونة من المزايا الرئيسية للحلول السحابية.",
            "يظل الأمن السيبراني مصدر قلق بالغ للمؤسسات بجميع أحجامها. تتطلب حماية البيانات الحساسة نهجًا شاملاً للأمن.",
            "يربط الإنترنت للأشياء الأجهزة اليومية بالويب، مما يخلق منازل ذكية وأماكن عمل فعالة. تستمر هذه التقنية في التطور بسرعة.",
        ],
    ),
    (
        Category::Business,
        [
            "تتطلب القيادة الفعالة التفكير الاستراتيجي والقدرة على التكيف. تركز الشركات الناجحة على رضا العملاء والتحسين المستمر.",
            "يوفر بحث السوق رؤى قيمة حول تفضيلات المستهلكين وسلوكهم. تستخدم الشركات هذه البيانات لتحسين عروض منتجاتها.",
            "أصبحت إدارة سلسلة التوريد أكثر تعقيدًا في الاقتصاد العالمي. يمكن أن تؤثر الكفاءة في هذا المجال بشكل كبير على الربحية.",
            "تُظهر مبادرات المسؤولية الاجتماعية للشركات التزام الشركة بالممارسات الأخلاقية. يمكن أن تعزز هذه البرامج سمعة العلامة التجارية.",
            "غير العمل عن بعد كيفية عمل الشركات وتعاونها. تتبنى العديد من المؤسسات نماذج هجينة لاستيعاب تفضيلات الموظفين.",
        ],
    ),
    (
        Category::Health,
        [
            "تساهم التمارين المنتظمة والتغذية المتوازنة في الصحة العامة. زاد الوعي بالصحة النفسية بشكل كبير في السنوات الأخيرة.",
            "تركز الرعاية الصحية الوقائية على الحفاظ على الصحة بدلاً من علاج المرض. تعد الفحوصات والمتابعات المنتظمة مكونات أساسية.",
            "وسع الطب عن بعد إمكانية الوصول إلى الخدمات الصحية، خاصة في المناطق الريفية. تستمر هذه التكنولوجيا في التطور والتحسن.",
            "يمكن أن تحسن تقنيات إدارة التوتر مثل التأمل واليقظة الذهنية نتائج الصحة العقلية والجسدية.",
            "تؤثر جودة النوم بشكل كبير على الصحة العامة والوظائف المعرفية. يعد إنشاء أنماط نوم متسقة أمرًا بالغ الأهمية للرفاهية.",
        ],
    ),
    (
        Category::Environment,
        [
            "يشكل تغير المناخ تحديات كبيرة لكوكبنا. الممارسات المستدامة ومصادر الطاقة المتجددة ضرورية لمستقبلنا.",
            "تهدف جهود الحفاظ على البيئة إلى حماية التنوع البيولوجي والحفاظ على الموائل الطبيعية. تتطلب هذه المبادرات تعاونًا محليًا وعالميًا.",
            "يعد تقليل النفايات البلاستيكية أولوية لحماية البيئة. تنفذ العديد من المجتمعات برامج إعادة التدوير وحظر البلاستيك ذي الاستخدام الواحد.",
            "تركز ممارسات الزراعة المستدامة على تقليل الأثر البيئي مع الحفاظ على الإنتاجية. يمكن أن تساعد هذه الأساليب في الحفاظ على صحة التربة.",
            "أصبح الحفاظ على المياه أكثر أهمية حيث تواجه العديد من المناطق نقصًا. يمكن أن تُحدث التغييرات البسيطة في العادات اليومية فرقًا كبيرًا.",
        ],
    ),
    (
        Category::Entertainment,
        [
            "تستمر صناعة الترفيه في التطور مع منصات البث. غير إنشاء المحتوى الرقمي طريقة استهلاكنا للوسائط.",
            "يوفر الواقع الافتراضي تجارب غامرة للألعاب والترفيه. تستمر هذه التقنية في التقدم وتصبح أكثر سهولة في الوصول إليها.",
            "أصبح لدى صانعي الأفلام المستقلين الآن المزيد من المنصات لعرض أعمالهم. خلقت خدمات البث فرصًا لسرد القصص المتنوعة.",
            "غير بث الموسيقى طريقة إصدار الفنانين لأعمالهم والترويج لها. تستمر الصناعة في التكيف مع هذه التغيرات التقنية.",
            "يمحو الترفيه التفاعلي الخط الفاصل بين المشاهدة السلبية والمشاركة النشطة. من المرجح أن يستمر هذا الاتجاه مع تقدم التقنية.",
        ],
    ),
    (
        Category::Finance,
        [
            "التثقيف المالي أمر بالغ الأهمية للنجاح الشخصي والتجاري. يجب تصميم استراتيجيات الاستثمار وفقًا للأهداف الفردية وتحمل المخاطر.",
            "تغير العملات الرقمية المشفرة وتقنية سلسلة الكتل الأنظمة المالية التقليدية. أصبح فهم هذه الابتكارات مهمًا بشكل متزايد.",
            "يتطلب التخطيط للتقاعد استراتيجية طويلة الأمد وادخار مستمر. يوفر البدء مبكرًا مزايا كبيرة من خلال النمو المركب.",
            "يساعد التنويع في إدارة مخاطر الاستثمار من خلال توزيع الأصول عبر فئات مختلفة. يمكن أن توفر هذه الاستراتيجية عوائد أكثر استقرارًا بمرور الوقت.",
            "الميزانية الشخصية هي أساس الصحة المالية. يمكن أن يؤدي تتبع النفقات ووضع أهداف واقعية إلى تحقيق أمان مالي أكبر.",
        ],
    ),
    (
        Category::Gaming,
        [
            "شهدت صناعة الألعاب نموًا هائلاً في السنوات الأخيرة. تجذب مسابقات الرياضات الإلكترونية الآن ملايين المشاهدين حول العالم.",
            "وسعت ألعاب الهاتف المحمول السوق لتشمل اللاعبين العاديين. هذه الألعاب سهلة الوصول لها جاذبية واسعة عبر الفئات المختلفة.",
            "أصبحت أدوات تطوير الألعاب أكثر سهولة في الوصول إليها للمبدعين المستقلين. أدى ذلك إلى زيادة في الألعاب الفريدة والمبتكرة.",
            "تخلق ألعاب الواقع الافتراضي تجارب غامرة كانت مستحيلة سابقًا. تستمر هذه التقنية في التطور والتحسن.",
            "توفر مجتمعات الألعاب اتصالات اجتماعية وتجارب مشتركة. يقدر العديد من اللاعبين هذه التفاعلات بقدر ما يقدرون الألعاب نفسها.",
        ],
    ),
    (
        Category::Social,
        [
            "غيرت منصات التواصل الاجتماعي طريقة تواصلنا. يجب أن تتكيف استراتيجيات التسويق الرقمي مع سلوكيات المستخدمين وتفضيلاتهم المتغيرة.",
            "تجمع المجتمعات عبر الإنترنت أشخاصًا ذوي اهتمامات مشتركة بغض النظر عن الموقع الجغرافي. يمكن أن تكون هذه الاتصالات مصادر قيمة للدعم.",
            "مكنت أدوات التواصل الرقمي من التعاون عن بعد والحفاظ على العلاقات. أصبحت هذه التقنيات ضرورية خلال فترات الإغلاق العالمية.",
            "أصبح إنشاء المحتوى أكثر سهولة في الوصول إليه مع تقنية الهواتف الذكية. يشارك العديد من الأفراد الآن وجهات نظرهم وإبداعهم عبر الإنترنت.",
            "غيرت الشبكات الاجتماعية كيفية الحفاظ على العلاقات ومشاركة المعلومات. يعد فهم هذه المنصات مهمًا بشكل متزايد في المجتمع الحديث.",
        ],
    ),
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_combination() {
        let pool = SamplePool::builtin();
        for category in Category::ALL {
            for language in [Language::English, Language::Arabic] {
                let sentences = pool.pool_for(category, language).expect("shipped pool");
                assert!(sentences.len() >= 5, "{category}/{language} too small");
            }
        }
    }

    #[test]
    fn test_missing_combination_is_empty_pool() {
        let pool = SamplePool::default().with_entries(
            Category::Health,
            Language::English,
            ["Sleep matters a great deal."],
        );
        assert!(pool.pool_for(Category::Health, Language::English).is_ok());
        let err = pool
            .pool_for(Category::Health, Language::Arabic)
            .expect_err("no arabic entries");
        assert!(matches!(err, FillError::EmptyPool { .. }));

        let empty = SamplePool::default().with_entries(
            Category::Gaming,
            Language::English,
            Vec::<String>::new(),
        );
        assert!(empty.pool_for(Category::Gaming, Language::English).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Finance".parse::<Category>().ok(), Some(Category::Finance));
        assert_eq!("ar".parse::<Language>().ok(), Some(Language::Arabic));
        assert_eq!("english".parse::<Language>().ok(), Some(Language::English));
        assert!("sports".parse::<Category>().is_err());
        assert!("fr".parse::<Language>().is_err());
    }
}
