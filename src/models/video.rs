//! Featured talk recordings.
//!
//! The gallery is static: it is not part of the fetched schedule.

/// A featured recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub speaker: &'static str,
    pub thumbnail: &'static str,
    pub video_url: &'static str,
    /// Running time as `mm:ss`
    pub duration: &'static str,
}

pub const FEATURED_VIDEOS: [Video; 5] = [
    Video {
        id: "v1",
        title: "React Conf 2025 - Day 1 Keynote",
        speaker: "React Team",
        thumbnail: "https://img.youtube.com/vi/YBXOcJybXBs/maxresdefault.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        duration: "45:00",
    },
    Video {
        id: "v2",
        title: "What's New in React 19",
        speaker: "React Core Team",
        thumbnail: "https://img.youtube.com/vi/T8TZQ6k4SLE/maxresdefault.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        duration: "32:00",
    },
    Video {
        id: "v3",
        title: "Server Components Deep Dive",
        speaker: "React Team",
        thumbnail: "https://img.youtube.com/vi/6jM_0wDOw4g/maxresdefault.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
        duration: "28:00",
    },
    Video {
        id: "v4",
        title: "Building for the Future with Expo",
        speaker: "Expo Team",
        thumbnail: "https://img.youtube.com/vi/SqrbwGKKz6I/maxresdefault.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
        duration: "35:00",
    },
    Video {
        id: "v5",
        title: "React Native - The New Architecture",
        speaker: "Meta Engineering",
        thumbnail: "https://img.youtube.com/vi/Nqp8olSHTwo/maxresdefault.jpg",
        video_url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerMeltdowns.mp4",
        duration: "40:00",
    },
];

/// Ordering offered by the gallery's sort toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoSort {
    /// Gallery order
    #[default]
    MostRecent,
    ByTitle,
}

impl VideoSort {
    pub fn label(self) -> &'static str {
        match self {
            VideoSort::MostRecent => "Most Recent",
            VideoSort::ByTitle => "By Title",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            VideoSort::MostRecent => VideoSort::ByTitle,
            VideoSort::ByTitle => VideoSort::MostRecent,
        }
    }
}

/// The gallery in the requested order.
pub fn sorted_videos(sort: VideoSort) -> Vec<&'static Video> {
    let mut videos: Vec<&'static Video> = FEATURED_VIDEOS.iter().collect();
    if sort == VideoSort::ByTitle {
        videos.sort_by_key(|v| v.title.to_lowercase());
    }
    videos
}
