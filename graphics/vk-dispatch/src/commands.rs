//! Vulkan entry points, by dispatch tier
//!
//! Mirrors the Vulkan registry at header revision 296. Each group lists the
//! entry points that exist when its predicate holds; see `table.rs` for what
//! this declaration expands to.

use crate::features::Predicate::{All, Any, Has, SpecVersion};

/// Vulkan header revision this table was built from
pub const HEADER_VERSION: u32 = 296;

entry_points! {
    loader {
        [Has("VK_BASE_VERSION_1_0")] {
            CreateInstance, create_instance = c"vkCreateInstance";
            EnumerateInstanceExtensionProperties, enumerate_instance_extension_properties = c"vkEnumerateInstanceExtensionProperties";
            EnumerateInstanceLayerProperties, enumerate_instance_layer_properties = c"vkEnumerateInstanceLayerProperties";
        }
        [Has("VK_BASE_VERSION_1_1")] {
            EnumerateInstanceVersion, enumerate_instance_version = c"vkEnumerateInstanceVersion";
        }
    }
    instance {
        [Has("VK_BASE_VERSION_1_0")] {
            CreateDevice, create_device = c"vkCreateDevice";
            DestroyInstance, destroy_instance = c"vkDestroyInstance";
            EnumerateDeviceExtensionProperties, enumerate_device_extension_properties = c"vkEnumerateDeviceExtensionProperties";
            EnumerateDeviceLayerProperties, enumerate_device_layer_properties = c"vkEnumerateDeviceLayerProperties";
            EnumeratePhysicalDevices, enumerate_physical_devices = c"vkEnumeratePhysicalDevices";
            GetDeviceProcAddr, get_device_proc_addr = c"vkGetDeviceProcAddr";
            GetPhysicalDeviceFeatures, get_physical_device_features = c"vkGetPhysicalDeviceFeatures";
            GetPhysicalDeviceFormatProperties, get_physical_device_format_properties = c"vkGetPhysicalDeviceFormatProperties";
            GetPhysicalDeviceImageFormatProperties, get_physical_device_image_format_properties = c"vkGetPhysicalDeviceImageFormatProperties";
            GetPhysicalDeviceMemoryProperties, get_physical_device_memory_properties = c"vkGetPhysicalDeviceMemoryProperties";
            GetPhysicalDeviceProperties, get_physical_device_properties = c"vkGetPhysicalDeviceProperties";
            GetPhysicalDeviceQueueFamilyProperties, get_physical_device_queue_family_properties = c"vkGetPhysicalDeviceQueueFamilyProperties";
            GetPhysicalDeviceSparseImageFormatProperties, get_physical_device_sparse_image_format_properties = c"vkGetPhysicalDeviceSparseImageFormatProperties";
        }
        [Has("VK_BASE_VERSION_1_1")] {
            EnumeratePhysicalDeviceGroups, enumerate_physical_device_groups = c"vkEnumeratePhysicalDeviceGroups";
            GetPhysicalDeviceExternalBufferProperties, get_physical_device_external_buffer_properties = c"vkGetPhysicalDeviceExternalBufferProperties";
            GetPhysicalDeviceExternalFenceProperties, get_physical_device_external_fence_properties = c"vkGetPhysicalDeviceExternalFenceProperties";
            GetPhysicalDeviceExternalSemaphoreProperties, get_physical_device_external_semaphore_properties = c"vkGetPhysicalDeviceExternalSemaphoreProperties";
            GetPhysicalDeviceFeatures2, get_physical_device_features2 = c"vkGetPhysicalDeviceFeatures2";
            GetPhysicalDeviceFormatProperties2, get_physical_device_format_properties2 = c"vkGetPhysicalDeviceFormatProperties2";
            GetPhysicalDeviceImageFormatProperties2, get_physical_device_image_format_properties2 = c"vkGetPhysicalDeviceImageFormatProperties2";
            GetPhysicalDeviceMemoryProperties2, get_physical_device_memory_properties2 = c"vkGetPhysicalDeviceMemoryProperties2";
            GetPhysicalDeviceProperties2, get_physical_device_properties2 = c"vkGetPhysicalDeviceProperties2";
            GetPhysicalDeviceQueueFamilyProperties2, get_physical_device_queue_family_properties2 = c"vkGetPhysicalDeviceQueueFamilyProperties2";
            GetPhysicalDeviceSparseImageFormatProperties2, get_physical_device_sparse_image_format_properties2 = c"vkGetPhysicalDeviceSparseImageFormatProperties2";
        }
        [Has("VK_BASE_VERSION_1_3")] {
            GetPhysicalDeviceToolProperties, get_physical_device_tool_properties = c"vkGetPhysicalDeviceToolProperties";
        }
        [Has("VK_ARM_data_graph")] {
            GetPhysicalDeviceQueueFamilyDataGraphProcessingEnginePropertiesARM, get_physical_device_queue_family_data_graph_processing_engine_properties_arm = c"vkGetPhysicalDeviceQueueFamilyDataGraphProcessingEnginePropertiesARM";
            GetPhysicalDeviceQueueFamilyDataGraphPropertiesARM, get_physical_device_queue_family_data_graph_properties_arm = c"vkGetPhysicalDeviceQueueFamilyDataGraphPropertiesARM";
        }
        [Has("VK_ARM_performance_counters_by_region")] {
            EnumeratePhysicalDeviceQueueFamilyPerformanceCountersByRegionARM, enumerate_physical_device_queue_family_performance_counters_by_region_arm = c"vkEnumeratePhysicalDeviceQueueFamilyPerformanceCountersByRegionARM";
        }
        [Has("VK_ARM_tensors")] {
            GetPhysicalDeviceExternalTensorPropertiesARM, get_physical_device_external_tensor_properties_arm = c"vkGetPhysicalDeviceExternalTensorPropertiesARM";
        }
        [Has("VK_EXT_acquire_drm_display")] {
            AcquireDrmDisplayEXT, acquire_drm_display_ext = c"vkAcquireDrmDisplayEXT";
            GetDrmDisplayEXT, get_drm_display_ext = c"vkGetDrmDisplayEXT";
        }
        [Has("VK_EXT_acquire_xlib_display")] {
            AcquireXlibDisplayEXT, acquire_xlib_display_ext = c"vkAcquireXlibDisplayEXT";
            GetRandROutputDisplayEXT, get_rand_r_output_display_ext = c"vkGetRandROutputDisplayEXT";
        }
        [Has("VK_EXT_calibrated_timestamps")] {
            GetPhysicalDeviceCalibrateableTimeDomainsEXT, get_physical_device_calibrateable_time_domains_ext = c"vkGetPhysicalDeviceCalibrateableTimeDomainsEXT";
        }
        [Has("VK_EXT_debug_report")] {
            CreateDebugReportCallbackEXT, create_debug_report_callback_ext = c"vkCreateDebugReportCallbackEXT";
            DebugReportMessageEXT, debug_report_message_ext = c"vkDebugReportMessageEXT";
            DestroyDebugReportCallbackEXT, destroy_debug_report_callback_ext = c"vkDestroyDebugReportCallbackEXT";
        }
        [Has("VK_EXT_debug_utils")] {
            CmdBeginDebugUtilsLabelEXT, cmd_begin_debug_utils_label_ext = c"vkCmdBeginDebugUtilsLabelEXT";
            CmdEndDebugUtilsLabelEXT, cmd_end_debug_utils_label_ext = c"vkCmdEndDebugUtilsLabelEXT";
            CmdInsertDebugUtilsLabelEXT, cmd_insert_debug_utils_label_ext = c"vkCmdInsertDebugUtilsLabelEXT";
            CreateDebugUtilsMessengerEXT, create_debug_utils_messenger_ext = c"vkCreateDebugUtilsMessengerEXT";
            DestroyDebugUtilsMessengerEXT, destroy_debug_utils_messenger_ext = c"vkDestroyDebugUtilsMessengerEXT";
            QueueBeginDebugUtilsLabelEXT, queue_begin_debug_utils_label_ext = c"vkQueueBeginDebugUtilsLabelEXT";
            QueueEndDebugUtilsLabelEXT, queue_end_debug_utils_label_ext = c"vkQueueEndDebugUtilsLabelEXT";
            QueueInsertDebugUtilsLabelEXT, queue_insert_debug_utils_label_ext = c"vkQueueInsertDebugUtilsLabelEXT";
            SetDebugUtilsObjectNameEXT, set_debug_utils_object_name_ext = c"vkSetDebugUtilsObjectNameEXT";
            SetDebugUtilsObjectTagEXT, set_debug_utils_object_tag_ext = c"vkSetDebugUtilsObjectTagEXT";
            SubmitDebugUtilsMessageEXT, submit_debug_utils_message_ext = c"vkSubmitDebugUtilsMessageEXT";
        }
        [Has("VK_EXT_direct_mode_display")] {
            ReleaseDisplayEXT, release_display_ext = c"vkReleaseDisplayEXT";
        }
        [Has("VK_EXT_directfb_surface")] {
            CreateDirectFBSurfaceEXT, create_direct_fb_surface_ext = c"vkCreateDirectFBSurfaceEXT";
            GetPhysicalDeviceDirectFBPresentationSupportEXT, get_physical_device_direct_fb_presentation_support_ext = c"vkGetPhysicalDeviceDirectFBPresentationSupportEXT";
        }
        [Has("VK_EXT_display_surface_counter")] {
            GetPhysicalDeviceSurfaceCapabilities2EXT, get_physical_device_surface_capabilities2_ext = c"vkGetPhysicalDeviceSurfaceCapabilities2EXT";
        }
        [Has("VK_EXT_full_screen_exclusive")] {
            GetPhysicalDeviceSurfacePresentModes2EXT, get_physical_device_surface_present_modes2_ext = c"vkGetPhysicalDeviceSurfacePresentModes2EXT";
        }
        [Has("VK_EXT_headless_surface")] {
            CreateHeadlessSurfaceEXT, create_headless_surface_ext = c"vkCreateHeadlessSurfaceEXT";
        }
        [Has("VK_EXT_metal_surface")] {
            CreateMetalSurfaceEXT, create_metal_surface_ext = c"vkCreateMetalSurfaceEXT";
        }
        [Has("VK_EXT_sample_locations")] {
            GetPhysicalDeviceMultisamplePropertiesEXT, get_physical_device_multisample_properties_ext = c"vkGetPhysicalDeviceMultisamplePropertiesEXT";
        }
        [Has("VK_EXT_tooling_info")] {
            GetPhysicalDeviceToolPropertiesEXT, get_physical_device_tool_properties_ext = c"vkGetPhysicalDeviceToolPropertiesEXT";
        }
        [Has("VK_FUCHSIA_imagepipe_surface")] {
            CreateImagePipeSurfaceFUCHSIA, create_image_pipe_surface_fuchsia = c"vkCreateImagePipeSurfaceFUCHSIA";
        }
        [Has("VK_GGP_stream_descriptor_surface")] {
            CreateStreamDescriptorSurfaceGGP, create_stream_descriptor_surface_ggp = c"vkCreateStreamDescriptorSurfaceGGP";
        }
        [Has("VK_KHR_android_surface")] {
            CreateAndroidSurfaceKHR, create_android_surface_khr = c"vkCreateAndroidSurfaceKHR";
        }
        [Has("VK_KHR_calibrated_timestamps")] {
            GetPhysicalDeviceCalibrateableTimeDomainsKHR, get_physical_device_calibrateable_time_domains_khr = c"vkGetPhysicalDeviceCalibrateableTimeDomainsKHR";
        }
        [Has("VK_KHR_cooperative_matrix")] {
            GetPhysicalDeviceCooperativeMatrixPropertiesKHR, get_physical_device_cooperative_matrix_properties_khr = c"vkGetPhysicalDeviceCooperativeMatrixPropertiesKHR";
        }
        [Has("VK_KHR_device_group_creation")] {
            EnumeratePhysicalDeviceGroupsKHR, enumerate_physical_device_groups_khr = c"vkEnumeratePhysicalDeviceGroupsKHR";
        }
        [Has("VK_KHR_display")] {
            CreateDisplayModeKHR, create_display_mode_khr = c"vkCreateDisplayModeKHR";
            CreateDisplayPlaneSurfaceKHR, create_display_plane_surface_khr = c"vkCreateDisplayPlaneSurfaceKHR";
            GetDisplayModePropertiesKHR, get_display_mode_properties_khr = c"vkGetDisplayModePropertiesKHR";
            GetDisplayPlaneCapabilitiesKHR, get_display_plane_capabilities_khr = c"vkGetDisplayPlaneCapabilitiesKHR";
            GetDisplayPlaneSupportedDisplaysKHR, get_display_plane_supported_displays_khr = c"vkGetDisplayPlaneSupportedDisplaysKHR";
            GetPhysicalDeviceDisplayPlanePropertiesKHR, get_physical_device_display_plane_properties_khr = c"vkGetPhysicalDeviceDisplayPlanePropertiesKHR";
            GetPhysicalDeviceDisplayPropertiesKHR, get_physical_device_display_properties_khr = c"vkGetPhysicalDeviceDisplayPropertiesKHR";
        }
        [Has("VK_KHR_external_fence_capabilities")] {
            GetPhysicalDeviceExternalFencePropertiesKHR, get_physical_device_external_fence_properties_khr = c"vkGetPhysicalDeviceExternalFencePropertiesKHR";
        }
        [Has("VK_KHR_external_memory_capabilities")] {
            GetPhysicalDeviceExternalBufferPropertiesKHR, get_physical_device_external_buffer_properties_khr = c"vkGetPhysicalDeviceExternalBufferPropertiesKHR";
        }
        [Has("VK_KHR_external_semaphore_capabilities")] {
            GetPhysicalDeviceExternalSemaphorePropertiesKHR, get_physical_device_external_semaphore_properties_khr = c"vkGetPhysicalDeviceExternalSemaphorePropertiesKHR";
        }
        [Has("VK_KHR_fragment_shading_rate")] {
            GetPhysicalDeviceFragmentShadingRatesKHR, get_physical_device_fragment_shading_rates_khr = c"vkGetPhysicalDeviceFragmentShadingRatesKHR";
        }
        [Has("VK_KHR_get_display_properties2")] {
            GetDisplayModeProperties2KHR, get_display_mode_properties2_khr = c"vkGetDisplayModeProperties2KHR";
            GetDisplayPlaneCapabilities2KHR, get_display_plane_capabilities2_khr = c"vkGetDisplayPlaneCapabilities2KHR";
            GetPhysicalDeviceDisplayPlaneProperties2KHR, get_physical_device_display_plane_properties2_khr = c"vkGetPhysicalDeviceDisplayPlaneProperties2KHR";
            GetPhysicalDeviceDisplayProperties2KHR, get_physical_device_display_properties2_khr = c"vkGetPhysicalDeviceDisplayProperties2KHR";
        }
        [Has("VK_KHR_get_physical_device_properties2")] {
            GetPhysicalDeviceFeatures2KHR, get_physical_device_features2_khr = c"vkGetPhysicalDeviceFeatures2KHR";
            GetPhysicalDeviceFormatProperties2KHR, get_physical_device_format_properties2_khr = c"vkGetPhysicalDeviceFormatProperties2KHR";
            GetPhysicalDeviceImageFormatProperties2KHR, get_physical_device_image_format_properties2_khr = c"vkGetPhysicalDeviceImageFormatProperties2KHR";
            GetPhysicalDeviceMemoryProperties2KHR, get_physical_device_memory_properties2_khr = c"vkGetPhysicalDeviceMemoryProperties2KHR";
            GetPhysicalDeviceProperties2KHR, get_physical_device_properties2_khr = c"vkGetPhysicalDeviceProperties2KHR";
            GetPhysicalDeviceQueueFamilyProperties2KHR, get_physical_device_queue_family_properties2_khr = c"vkGetPhysicalDeviceQueueFamilyProperties2KHR";
            GetPhysicalDeviceSparseImageFormatProperties2KHR, get_physical_device_sparse_image_format_properties2_khr = c"vkGetPhysicalDeviceSparseImageFormatProperties2KHR";
        }
        [Has("VK_KHR_get_surface_capabilities2")] {
            GetPhysicalDeviceSurfaceCapabilities2KHR, get_physical_device_surface_capabilities2_khr = c"vkGetPhysicalDeviceSurfaceCapabilities2KHR";
            GetPhysicalDeviceSurfaceFormats2KHR, get_physical_device_surface_formats2_khr = c"vkGetPhysicalDeviceSurfaceFormats2KHR";
        }
        [Has("VK_KHR_performance_query")] {
            EnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR, enumerate_physical_device_queue_family_performance_query_counters_khr = c"vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR";
            GetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR, get_physical_device_queue_family_performance_query_passes_khr = c"vkGetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR";
        }
        [Has("VK_KHR_surface")] {
            DestroySurfaceKHR, destroy_surface_khr = c"vkDestroySurfaceKHR";
            GetPhysicalDeviceSurfaceCapabilitiesKHR, get_physical_device_surface_capabilities_khr = c"vkGetPhysicalDeviceSurfaceCapabilitiesKHR";
            GetPhysicalDeviceSurfaceFormatsKHR, get_physical_device_surface_formats_khr = c"vkGetPhysicalDeviceSurfaceFormatsKHR";
            GetPhysicalDeviceSurfacePresentModesKHR, get_physical_device_surface_present_modes_khr = c"vkGetPhysicalDeviceSurfacePresentModesKHR";
            GetPhysicalDeviceSurfaceSupportKHR, get_physical_device_surface_support_khr = c"vkGetPhysicalDeviceSurfaceSupportKHR";
        }
        [Has("VK_KHR_video_encode_queue")] {
            GetPhysicalDeviceVideoEncodeQualityLevelPropertiesKHR, get_physical_device_video_encode_quality_level_properties_khr = c"vkGetPhysicalDeviceVideoEncodeQualityLevelPropertiesKHR";
        }
        [Has("VK_KHR_video_queue")] {
            GetPhysicalDeviceVideoCapabilitiesKHR, get_physical_device_video_capabilities_khr = c"vkGetPhysicalDeviceVideoCapabilitiesKHR";
            GetPhysicalDeviceVideoFormatPropertiesKHR, get_physical_device_video_format_properties_khr = c"vkGetPhysicalDeviceVideoFormatPropertiesKHR";
        }
        [Has("VK_KHR_wayland_surface")] {
            CreateWaylandSurfaceKHR, create_wayland_surface_khr = c"vkCreateWaylandSurfaceKHR";
            GetPhysicalDeviceWaylandPresentationSupportKHR, get_physical_device_wayland_presentation_support_khr = c"vkGetPhysicalDeviceWaylandPresentationSupportKHR";
        }
        [Has("VK_KHR_win32_surface")] {
            CreateWin32SurfaceKHR, create_win32_surface_khr = c"vkCreateWin32SurfaceKHR";
            GetPhysicalDeviceWin32PresentationSupportKHR, get_physical_device_win32_presentation_support_khr = c"vkGetPhysicalDeviceWin32PresentationSupportKHR";
        }
        [Has("VK_KHR_xcb_surface")] {
            CreateXcbSurfaceKHR, create_xcb_surface_khr = c"vkCreateXcbSurfaceKHR";
            GetPhysicalDeviceXcbPresentationSupportKHR, get_physical_device_xcb_presentation_support_khr = c"vkGetPhysicalDeviceXcbPresentationSupportKHR";
        }
        [Has("VK_KHR_xlib_surface")] {
            CreateXlibSurfaceKHR, create_xlib_surface_khr = c"vkCreateXlibSurfaceKHR";
            GetPhysicalDeviceXlibPresentationSupportKHR, get_physical_device_xlib_presentation_support_khr = c"vkGetPhysicalDeviceXlibPresentationSupportKHR";
        }
        [Has("VK_MVK_ios_surface")] {
            CreateIOSSurfaceMVK, create_ios_surface_mvk = c"vkCreateIOSSurfaceMVK";
        }
        [Has("VK_MVK_macos_surface")] {
            CreateMacOSSurfaceMVK, create_mac_os_surface_mvk = c"vkCreateMacOSSurfaceMVK";
        }
        [Has("VK_NN_vi_surface")] {
            CreateViSurfaceNN, create_vi_surface_nn = c"vkCreateViSurfaceNN";
        }
        [Has("VK_NV_acquire_winrt_display")] {
            AcquireWinrtDisplayNV, acquire_winrt_display_nv = c"vkAcquireWinrtDisplayNV";
            GetWinrtDisplayNV, get_winrt_display_nv = c"vkGetWinrtDisplayNV";
        }
        [Has("VK_NV_cooperative_matrix")] {
            GetPhysicalDeviceCooperativeMatrixPropertiesNV, get_physical_device_cooperative_matrix_properties_nv = c"vkGetPhysicalDeviceCooperativeMatrixPropertiesNV";
        }
        [Has("VK_NV_cooperative_matrix2")] {
            GetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV, get_physical_device_cooperative_matrix_flexible_dimensions_properties_nv = c"vkGetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV";
        }
        [Has("VK_NV_cooperative_vector")] {
            GetPhysicalDeviceCooperativeVectorPropertiesNV, get_physical_device_cooperative_vector_properties_nv = c"vkGetPhysicalDeviceCooperativeVectorPropertiesNV";
        }
        [Has("VK_NV_coverage_reduction_mode")] {
            GetPhysicalDeviceSupportedFramebufferMixedSamplesCombinationsNV, get_physical_device_supported_framebuffer_mixed_samples_combinations_nv = c"vkGetPhysicalDeviceSupportedFramebufferMixedSamplesCombinationsNV";
        }
        [Has("VK_NV_external_memory_capabilities")] {
            GetPhysicalDeviceExternalImageFormatPropertiesNV, get_physical_device_external_image_format_properties_nv = c"vkGetPhysicalDeviceExternalImageFormatPropertiesNV";
        }
        [Has("VK_NV_optical_flow")] {
            GetPhysicalDeviceOpticalFlowImageFormatsNV, get_physical_device_optical_flow_image_formats_nv = c"vkGetPhysicalDeviceOpticalFlowImageFormatsNV";
        }
        [Has("VK_OHOS_surface")] {
            CreateSurfaceOHOS, create_surface_ohos = c"vkCreateSurfaceOHOS";
        }
        [Has("VK_QNX_screen_surface")] {
            CreateScreenSurfaceQNX, create_screen_surface_qnx = c"vkCreateScreenSurfaceQNX";
            GetPhysicalDeviceScreenPresentationSupportQNX, get_physical_device_screen_presentation_support_qnx = c"vkGetPhysicalDeviceScreenPresentationSupportQNX";
        }
        [Any(&[All(&[Has("VK_KHR_device_group"), Has("VK_KHR_surface")]), All(&[Has("VK_KHR_swapchain"), Has("VK_VERSION_1_1")])])] {
            GetPhysicalDevicePresentRectanglesKHR, get_physical_device_present_rectangles_khr = c"vkGetPhysicalDevicePresentRectanglesKHR";
        }
    }
    device {
        [Has("VK_BASE_VERSION_1_0")] {
            AllocateCommandBuffers, allocate_command_buffers = c"vkAllocateCommandBuffers";
            AllocateMemory, allocate_memory = c"vkAllocateMemory";
            BeginCommandBuffer, begin_command_buffer = c"vkBeginCommandBuffer";
            BindBufferMemory, bind_buffer_memory = c"vkBindBufferMemory";
            BindImageMemory, bind_image_memory = c"vkBindImageMemory";
            CmdBeginQuery, cmd_begin_query = c"vkCmdBeginQuery";
            CmdCopyBuffer, cmd_copy_buffer = c"vkCmdCopyBuffer";
            CmdCopyBufferToImage, cmd_copy_buffer_to_image = c"vkCmdCopyBufferToImage";
            CmdCopyImage, cmd_copy_image = c"vkCmdCopyImage";
            CmdCopyImageToBuffer, cmd_copy_image_to_buffer = c"vkCmdCopyImageToBuffer";
            CmdCopyQueryPoolResults, cmd_copy_query_pool_results = c"vkCmdCopyQueryPoolResults";
            CmdEndQuery, cmd_end_query = c"vkCmdEndQuery";
            CmdExecuteCommands, cmd_execute_commands = c"vkCmdExecuteCommands";
            CmdFillBuffer, cmd_fill_buffer = c"vkCmdFillBuffer";
            CmdPipelineBarrier, cmd_pipeline_barrier = c"vkCmdPipelineBarrier";
            CmdResetQueryPool, cmd_reset_query_pool = c"vkCmdResetQueryPool";
            CmdUpdateBuffer, cmd_update_buffer = c"vkCmdUpdateBuffer";
            CmdWriteTimestamp, cmd_write_timestamp = c"vkCmdWriteTimestamp";
            CreateBuffer, create_buffer = c"vkCreateBuffer";
            CreateCommandPool, create_command_pool = c"vkCreateCommandPool";
            CreateFence, create_fence = c"vkCreateFence";
            CreateImage, create_image = c"vkCreateImage";
            CreateImageView, create_image_view = c"vkCreateImageView";
            CreateQueryPool, create_query_pool = c"vkCreateQueryPool";
            CreateSemaphore, create_semaphore = c"vkCreateSemaphore";
            DestroyBuffer, destroy_buffer = c"vkDestroyBuffer";
            DestroyCommandPool, destroy_command_pool = c"vkDestroyCommandPool";
            DestroyDevice, destroy_device = c"vkDestroyDevice";
            DestroyFence, destroy_fence = c"vkDestroyFence";
            DestroyImage, destroy_image = c"vkDestroyImage";
            DestroyImageView, destroy_image_view = c"vkDestroyImageView";
            DestroyQueryPool, destroy_query_pool = c"vkDestroyQueryPool";
            DestroySemaphore, destroy_semaphore = c"vkDestroySemaphore";
            DeviceWaitIdle, device_wait_idle = c"vkDeviceWaitIdle";
            EndCommandBuffer, end_command_buffer = c"vkEndCommandBuffer";
            FlushMappedMemoryRanges, flush_mapped_memory_ranges = c"vkFlushMappedMemoryRanges";
            FreeCommandBuffers, free_command_buffers = c"vkFreeCommandBuffers";
            FreeMemory, free_memory = c"vkFreeMemory";
            GetBufferMemoryRequirements, get_buffer_memory_requirements = c"vkGetBufferMemoryRequirements";
            GetDeviceMemoryCommitment, get_device_memory_commitment = c"vkGetDeviceMemoryCommitment";
            GetDeviceQueue, get_device_queue = c"vkGetDeviceQueue";
            GetFenceStatus, get_fence_status = c"vkGetFenceStatus";
            GetImageMemoryRequirements, get_image_memory_requirements = c"vkGetImageMemoryRequirements";
            GetImageSparseMemoryRequirements, get_image_sparse_memory_requirements = c"vkGetImageSparseMemoryRequirements";
            GetImageSubresourceLayout, get_image_subresource_layout = c"vkGetImageSubresourceLayout";
            GetQueryPoolResults, get_query_pool_results = c"vkGetQueryPoolResults";
            InvalidateMappedMemoryRanges, invalidate_mapped_memory_ranges = c"vkInvalidateMappedMemoryRanges";
            MapMemory, map_memory = c"vkMapMemory";
            QueueBindSparse, queue_bind_sparse = c"vkQueueBindSparse";
            QueueSubmit, queue_submit = c"vkQueueSubmit";
            QueueWaitIdle, queue_wait_idle = c"vkQueueWaitIdle";
            ResetCommandBuffer, reset_command_buffer = c"vkResetCommandBuffer";
            ResetCommandPool, reset_command_pool = c"vkResetCommandPool";
            ResetFences, reset_fences = c"vkResetFences";
            UnmapMemory, unmap_memory = c"vkUnmapMemory";
            WaitForFences, wait_for_fences = c"vkWaitForFences";
        }
        [Has("VK_COMPUTE_VERSION_1_0")] {
            AllocateDescriptorSets, allocate_descriptor_sets = c"vkAllocateDescriptorSets";
            CmdBindDescriptorSets, cmd_bind_descriptor_sets = c"vkCmdBindDescriptorSets";
            CmdBindPipeline, cmd_bind_pipeline = c"vkCmdBindPipeline";
            CmdClearColorImage, cmd_clear_color_image = c"vkCmdClearColorImage";
            CmdDispatch, cmd_dispatch = c"vkCmdDispatch";
            CmdDispatchIndirect, cmd_dispatch_indirect = c"vkCmdDispatchIndirect";
            CmdPushConstants, cmd_push_constants = c"vkCmdPushConstants";
            CmdResetEvent, cmd_reset_event = c"vkCmdResetEvent";
            CmdSetEvent, cmd_set_event = c"vkCmdSetEvent";
            CmdWaitEvents, cmd_wait_events = c"vkCmdWaitEvents";
            CreateBufferView, create_buffer_view = c"vkCreateBufferView";
            CreateComputePipelines, create_compute_pipelines = c"vkCreateComputePipelines";
            CreateDescriptorPool, create_descriptor_pool = c"vkCreateDescriptorPool";
            CreateDescriptorSetLayout, create_descriptor_set_layout = c"vkCreateDescriptorSetLayout";
            CreateEvent, create_event = c"vkCreateEvent";
            CreatePipelineCache, create_pipeline_cache = c"vkCreatePipelineCache";
            CreatePipelineLayout, create_pipeline_layout = c"vkCreatePipelineLayout";
            CreateSampler, create_sampler = c"vkCreateSampler";
            CreateShaderModule, create_shader_module = c"vkCreateShaderModule";
            DestroyBufferView, destroy_buffer_view = c"vkDestroyBufferView";
            DestroyDescriptorPool, destroy_descriptor_pool = c"vkDestroyDescriptorPool";
            DestroyDescriptorSetLayout, destroy_descriptor_set_layout = c"vkDestroyDescriptorSetLayout";
            DestroyEvent, destroy_event = c"vkDestroyEvent";
            DestroyPipeline, destroy_pipeline = c"vkDestroyPipeline";
            DestroyPipelineCache, destroy_pipeline_cache = c"vkDestroyPipelineCache";
            DestroyPipelineLayout, destroy_pipeline_layout = c"vkDestroyPipelineLayout";
            DestroySampler, destroy_sampler = c"vkDestroySampler";
            DestroyShaderModule, destroy_shader_module = c"vkDestroyShaderModule";
            FreeDescriptorSets, free_descriptor_sets = c"vkFreeDescriptorSets";
            GetEventStatus, get_event_status = c"vkGetEventStatus";
            GetPipelineCacheData, get_pipeline_cache_data = c"vkGetPipelineCacheData";
            MergePipelineCaches, merge_pipeline_caches = c"vkMergePipelineCaches";
            ResetDescriptorPool, reset_descriptor_pool = c"vkResetDescriptorPool";
            ResetEvent, reset_event = c"vkResetEvent";
            SetEvent, set_event = c"vkSetEvent";
            UpdateDescriptorSets, update_descriptor_sets = c"vkUpdateDescriptorSets";
        }
        [Has("VK_GRAPHICS_VERSION_1_0")] {
            CmdBeginRenderPass, cmd_begin_render_pass = c"vkCmdBeginRenderPass";
            CmdBindIndexBuffer, cmd_bind_index_buffer = c"vkCmdBindIndexBuffer";
            CmdBindVertexBuffers, cmd_bind_vertex_buffers = c"vkCmdBindVertexBuffers";
            CmdBlitImage, cmd_blit_image = c"vkCmdBlitImage";
            CmdClearAttachments, cmd_clear_attachments = c"vkCmdClearAttachments";
            CmdClearDepthStencilImage, cmd_clear_depth_stencil_image = c"vkCmdClearDepthStencilImage";
            CmdDraw, cmd_draw = c"vkCmdDraw";
            CmdDrawIndexed, cmd_draw_indexed = c"vkCmdDrawIndexed";
            CmdDrawIndexedIndirect, cmd_draw_indexed_indirect = c"vkCmdDrawIndexedIndirect";
            CmdDrawIndirect, cmd_draw_indirect = c"vkCmdDrawIndirect";
            CmdEndRenderPass, cmd_end_render_pass = c"vkCmdEndRenderPass";
            CmdNextSubpass, cmd_next_subpass = c"vkCmdNextSubpass";
            CmdResolveImage, cmd_resolve_image = c"vkCmdResolveImage";
            CmdSetBlendConstants, cmd_set_blend_constants = c"vkCmdSetBlendConstants";
            CmdSetDepthBias, cmd_set_depth_bias = c"vkCmdSetDepthBias";
            CmdSetDepthBounds, cmd_set_depth_bounds = c"vkCmdSetDepthBounds";
            CmdSetLineWidth, cmd_set_line_width = c"vkCmdSetLineWidth";
            CmdSetScissor, cmd_set_scissor = c"vkCmdSetScissor";
            CmdSetStencilCompareMask, cmd_set_stencil_compare_mask = c"vkCmdSetStencilCompareMask";
            CmdSetStencilReference, cmd_set_stencil_reference = c"vkCmdSetStencilReference";
            CmdSetStencilWriteMask, cmd_set_stencil_write_mask = c"vkCmdSetStencilWriteMask";
            CmdSetViewport, cmd_set_viewport = c"vkCmdSetViewport";
            CreateFramebuffer, create_framebuffer = c"vkCreateFramebuffer";
            CreateGraphicsPipelines, create_graphics_pipelines = c"vkCreateGraphicsPipelines";
            CreateRenderPass, create_render_pass = c"vkCreateRenderPass";
            DestroyFramebuffer, destroy_framebuffer = c"vkDestroyFramebuffer";
            DestroyRenderPass, destroy_render_pass = c"vkDestroyRenderPass";
            GetRenderAreaGranularity, get_render_area_granularity = c"vkGetRenderAreaGranularity";
        }
        [Has("VK_BASE_VERSION_1_1")] {
            BindBufferMemory2, bind_buffer_memory2 = c"vkBindBufferMemory2";
            BindImageMemory2, bind_image_memory2 = c"vkBindImageMemory2";
            CmdSetDeviceMask, cmd_set_device_mask = c"vkCmdSetDeviceMask";
            GetBufferMemoryRequirements2, get_buffer_memory_requirements2 = c"vkGetBufferMemoryRequirements2";
            GetDeviceGroupPeerMemoryFeatures, get_device_group_peer_memory_features = c"vkGetDeviceGroupPeerMemoryFeatures";
            GetDeviceQueue2, get_device_queue2 = c"vkGetDeviceQueue2";
            GetImageMemoryRequirements2, get_image_memory_requirements2 = c"vkGetImageMemoryRequirements2";
            GetImageSparseMemoryRequirements2, get_image_sparse_memory_requirements2 = c"vkGetImageSparseMemoryRequirements2";
            TrimCommandPool, trim_command_pool = c"vkTrimCommandPool";
        }
        [Has("VK_COMPUTE_VERSION_1_1")] {
            CmdDispatchBase, cmd_dispatch_base = c"vkCmdDispatchBase";
            CreateDescriptorUpdateTemplate, create_descriptor_update_template = c"vkCreateDescriptorUpdateTemplate";
            CreateSamplerYcbcrConversion, create_sampler_ycbcr_conversion = c"vkCreateSamplerYcbcrConversion";
            DestroyDescriptorUpdateTemplate, destroy_descriptor_update_template = c"vkDestroyDescriptorUpdateTemplate";
            DestroySamplerYcbcrConversion, destroy_sampler_ycbcr_conversion = c"vkDestroySamplerYcbcrConversion";
            GetDescriptorSetLayoutSupport, get_descriptor_set_layout_support = c"vkGetDescriptorSetLayoutSupport";
            UpdateDescriptorSetWithTemplate, update_descriptor_set_with_template = c"vkUpdateDescriptorSetWithTemplate";
        }
        [Has("VK_BASE_VERSION_1_2")] {
            GetBufferDeviceAddress, get_buffer_device_address = c"vkGetBufferDeviceAddress";
            GetBufferOpaqueCaptureAddress, get_buffer_opaque_capture_address = c"vkGetBufferOpaqueCaptureAddress";
            GetDeviceMemoryOpaqueCaptureAddress, get_device_memory_opaque_capture_address = c"vkGetDeviceMemoryOpaqueCaptureAddress";
            GetSemaphoreCounterValue, get_semaphore_counter_value = c"vkGetSemaphoreCounterValue";
            ResetQueryPool, reset_query_pool = c"vkResetQueryPool";
            SignalSemaphore, signal_semaphore = c"vkSignalSemaphore";
            WaitSemaphores, wait_semaphores = c"vkWaitSemaphores";
        }
        [Has("VK_GRAPHICS_VERSION_1_2")] {
            CmdBeginRenderPass2, cmd_begin_render_pass2 = c"vkCmdBeginRenderPass2";
            CmdDrawIndexedIndirectCount, cmd_draw_indexed_indirect_count = c"vkCmdDrawIndexedIndirectCount";
            CmdDrawIndirectCount, cmd_draw_indirect_count = c"vkCmdDrawIndirectCount";
            CmdEndRenderPass2, cmd_end_render_pass2 = c"vkCmdEndRenderPass2";
            CmdNextSubpass2, cmd_next_subpass2 = c"vkCmdNextSubpass2";
            CreateRenderPass2, create_render_pass2 = c"vkCreateRenderPass2";
        }
        [Has("VK_BASE_VERSION_1_3")] {
            CmdCopyBuffer2, cmd_copy_buffer2 = c"vkCmdCopyBuffer2";
            CmdCopyBufferToImage2, cmd_copy_buffer_to_image2 = c"vkCmdCopyBufferToImage2";
            CmdCopyImage2, cmd_copy_image2 = c"vkCmdCopyImage2";
            CmdCopyImageToBuffer2, cmd_copy_image_to_buffer2 = c"vkCmdCopyImageToBuffer2";
            CmdPipelineBarrier2, cmd_pipeline_barrier2 = c"vkCmdPipelineBarrier2";
            CmdWriteTimestamp2, cmd_write_timestamp2 = c"vkCmdWriteTimestamp2";
            CreatePrivateDataSlot, create_private_data_slot = c"vkCreatePrivateDataSlot";
            DestroyPrivateDataSlot, destroy_private_data_slot = c"vkDestroyPrivateDataSlot";
            GetDeviceBufferMemoryRequirements, get_device_buffer_memory_requirements = c"vkGetDeviceBufferMemoryRequirements";
            GetDeviceImageMemoryRequirements, get_device_image_memory_requirements = c"vkGetDeviceImageMemoryRequirements";
            GetDeviceImageSparseMemoryRequirements, get_device_image_sparse_memory_requirements = c"vkGetDeviceImageSparseMemoryRequirements";
            GetPrivateData, get_private_data = c"vkGetPrivateData";
            QueueSubmit2, queue_submit2 = c"vkQueueSubmit2";
            SetPrivateData, set_private_data = c"vkSetPrivateData";
        }
        [Has("VK_COMPUTE_VERSION_1_3")] {
            CmdResetEvent2, cmd_reset_event2 = c"vkCmdResetEvent2";
            CmdSetEvent2, cmd_set_event2 = c"vkCmdSetEvent2";
            CmdWaitEvents2, cmd_wait_events2 = c"vkCmdWaitEvents2";
        }
        [Has("VK_GRAPHICS_VERSION_1_3")] {
            CmdBeginRendering, cmd_begin_rendering = c"vkCmdBeginRendering";
            CmdBindVertexBuffers2, cmd_bind_vertex_buffers2 = c"vkCmdBindVertexBuffers2";
            CmdBlitImage2, cmd_blit_image2 = c"vkCmdBlitImage2";
            CmdEndRendering, cmd_end_rendering = c"vkCmdEndRendering";
            CmdResolveImage2, cmd_resolve_image2 = c"vkCmdResolveImage2";
            CmdSetCullMode, cmd_set_cull_mode = c"vkCmdSetCullMode";
            CmdSetDepthBiasEnable, cmd_set_depth_bias_enable = c"vkCmdSetDepthBiasEnable";
            CmdSetDepthBoundsTestEnable, cmd_set_depth_bounds_test_enable = c"vkCmdSetDepthBoundsTestEnable";
            CmdSetDepthCompareOp, cmd_set_depth_compare_op = c"vkCmdSetDepthCompareOp";
            CmdSetDepthTestEnable, cmd_set_depth_test_enable = c"vkCmdSetDepthTestEnable";
            CmdSetDepthWriteEnable, cmd_set_depth_write_enable = c"vkCmdSetDepthWriteEnable";
            CmdSetFrontFace, cmd_set_front_face = c"vkCmdSetFrontFace";
            CmdSetPrimitiveRestartEnable, cmd_set_primitive_restart_enable = c"vkCmdSetPrimitiveRestartEnable";
            CmdSetPrimitiveTopology, cmd_set_primitive_topology = c"vkCmdSetPrimitiveTopology";
            CmdSetRasterizerDiscardEnable, cmd_set_rasterizer_discard_enable = c"vkCmdSetRasterizerDiscardEnable";
            CmdSetScissorWithCount, cmd_set_scissor_with_count = c"vkCmdSetScissorWithCount";
            CmdSetStencilOp, cmd_set_stencil_op = c"vkCmdSetStencilOp";
            CmdSetStencilTestEnable, cmd_set_stencil_test_enable = c"vkCmdSetStencilTestEnable";
            CmdSetViewportWithCount, cmd_set_viewport_with_count = c"vkCmdSetViewportWithCount";
        }
        [Has("VK_BASE_VERSION_1_4")] {
            CopyImageToImage, copy_image_to_image = c"vkCopyImageToImage";
            CopyImageToMemory, copy_image_to_memory = c"vkCopyImageToMemory";
            CopyMemoryToImage, copy_memory_to_image = c"vkCopyMemoryToImage";
            GetDeviceImageSubresourceLayout, get_device_image_subresource_layout = c"vkGetDeviceImageSubresourceLayout";
            GetImageSubresourceLayout2, get_image_subresource_layout2 = c"vkGetImageSubresourceLayout2";
            MapMemory2, map_memory2 = c"vkMapMemory2";
            TransitionImageLayout, transition_image_layout = c"vkTransitionImageLayout";
            UnmapMemory2, unmap_memory2 = c"vkUnmapMemory2";
        }
        [Has("VK_COMPUTE_VERSION_1_4")] {
            CmdBindDescriptorSets2, cmd_bind_descriptor_sets2 = c"vkCmdBindDescriptorSets2";
            CmdPushConstants2, cmd_push_constants2 = c"vkCmdPushConstants2";
            CmdPushDescriptorSet, cmd_push_descriptor_set = c"vkCmdPushDescriptorSet";
            CmdPushDescriptorSet2, cmd_push_descriptor_set2 = c"vkCmdPushDescriptorSet2";
            CmdPushDescriptorSetWithTemplate, cmd_push_descriptor_set_with_template = c"vkCmdPushDescriptorSetWithTemplate";
            CmdPushDescriptorSetWithTemplate2, cmd_push_descriptor_set_with_template2 = c"vkCmdPushDescriptorSetWithTemplate2";
        }
        [Has("VK_GRAPHICS_VERSION_1_4")] {
            CmdBindIndexBuffer2, cmd_bind_index_buffer2 = c"vkCmdBindIndexBuffer2";
            CmdSetLineStipple, cmd_set_line_stipple = c"vkCmdSetLineStipple";
            CmdSetRenderingAttachmentLocations, cmd_set_rendering_attachment_locations = c"vkCmdSetRenderingAttachmentLocations";
            CmdSetRenderingInputAttachmentIndices, cmd_set_rendering_input_attachment_indices = c"vkCmdSetRenderingInputAttachmentIndices";
            GetRenderingAreaGranularity, get_rendering_area_granularity = c"vkGetRenderingAreaGranularity";
        }
        [Has("VK_AMDX_shader_enqueue")] {
            CmdDispatchGraphAMDX, cmd_dispatch_graph_amdx = c"vkCmdDispatchGraphAMDX";
            CmdDispatchGraphIndirectAMDX, cmd_dispatch_graph_indirect_amdx = c"vkCmdDispatchGraphIndirectAMDX";
            CmdDispatchGraphIndirectCountAMDX, cmd_dispatch_graph_indirect_count_amdx = c"vkCmdDispatchGraphIndirectCountAMDX";
            CmdInitializeGraphScratchMemoryAMDX, cmd_initialize_graph_scratch_memory_amdx = c"vkCmdInitializeGraphScratchMemoryAMDX";
            CreateExecutionGraphPipelinesAMDX, create_execution_graph_pipelines_amdx = c"vkCreateExecutionGraphPipelinesAMDX";
            GetExecutionGraphPipelineNodeIndexAMDX, get_execution_graph_pipeline_node_index_amdx = c"vkGetExecutionGraphPipelineNodeIndexAMDX";
            GetExecutionGraphPipelineScratchSizeAMDX, get_execution_graph_pipeline_scratch_size_amdx = c"vkGetExecutionGraphPipelineScratchSizeAMDX";
        }
        [Has("VK_AMD_anti_lag")] {
            AntiLagUpdateAMD, anti_lag_update_amd = c"vkAntiLagUpdateAMD";
        }
        [Has("VK_AMD_buffer_marker")] {
            CmdWriteBufferMarkerAMD, cmd_write_buffer_marker_amd = c"vkCmdWriteBufferMarkerAMD";
        }
        [All(&[Has("VK_AMD_buffer_marker"), Any(&[Has("VK_VERSION_1_3"), Has("VK_KHR_synchronization2")])])] {
            CmdWriteBufferMarker2AMD, cmd_write_buffer_marker2_amd = c"vkCmdWriteBufferMarker2AMD";
        }
        [Has("VK_AMD_display_native_hdr")] {
            SetLocalDimmingAMD, set_local_dimming_amd = c"vkSetLocalDimmingAMD";
        }
        [Has("VK_AMD_draw_indirect_count")] {
            CmdDrawIndexedIndirectCountAMD, cmd_draw_indexed_indirect_count_amd = c"vkCmdDrawIndexedIndirectCountAMD";
            CmdDrawIndirectCountAMD, cmd_draw_indirect_count_amd = c"vkCmdDrawIndirectCountAMD";
        }
        [Has("VK_AMD_shader_info")] {
            GetShaderInfoAMD, get_shader_info_amd = c"vkGetShaderInfoAMD";
        }
        [Has("VK_ANDROID_external_memory_android_hardware_buffer")] {
            GetAndroidHardwareBufferPropertiesANDROID, get_android_hardware_buffer_properties_android = c"vkGetAndroidHardwareBufferPropertiesANDROID";
            GetMemoryAndroidHardwareBufferANDROID, get_memory_android_hardware_buffer_android = c"vkGetMemoryAndroidHardwareBufferANDROID";
        }
        [Has("VK_ARM_data_graph")] {
            BindDataGraphPipelineSessionMemoryARM, bind_data_graph_pipeline_session_memory_arm = c"vkBindDataGraphPipelineSessionMemoryARM";
            CmdDispatchDataGraphARM, cmd_dispatch_data_graph_arm = c"vkCmdDispatchDataGraphARM";
            CreateDataGraphPipelineSessionARM, create_data_graph_pipeline_session_arm = c"vkCreateDataGraphPipelineSessionARM";
            CreateDataGraphPipelinesARM, create_data_graph_pipelines_arm = c"vkCreateDataGraphPipelinesARM";
            DestroyDataGraphPipelineSessionARM, destroy_data_graph_pipeline_session_arm = c"vkDestroyDataGraphPipelineSessionARM";
            GetDataGraphPipelineAvailablePropertiesARM, get_data_graph_pipeline_available_properties_arm = c"vkGetDataGraphPipelineAvailablePropertiesARM";
            GetDataGraphPipelinePropertiesARM, get_data_graph_pipeline_properties_arm = c"vkGetDataGraphPipelinePropertiesARM";
            GetDataGraphPipelineSessionBindPointRequirementsARM, get_data_graph_pipeline_session_bind_point_requirements_arm = c"vkGetDataGraphPipelineSessionBindPointRequirementsARM";
            GetDataGraphPipelineSessionMemoryRequirementsARM, get_data_graph_pipeline_session_memory_requirements_arm = c"vkGetDataGraphPipelineSessionMemoryRequirementsARM";
        }
        [Has("VK_ARM_tensors")] {
            BindTensorMemoryARM, bind_tensor_memory_arm = c"vkBindTensorMemoryARM";
            CmdCopyTensorARM, cmd_copy_tensor_arm = c"vkCmdCopyTensorARM";
            CreateTensorARM, create_tensor_arm = c"vkCreateTensorARM";
            CreateTensorViewARM, create_tensor_view_arm = c"vkCreateTensorViewARM";
            DestroyTensorARM, destroy_tensor_arm = c"vkDestroyTensorARM";
            DestroyTensorViewARM, destroy_tensor_view_arm = c"vkDestroyTensorViewARM";
            GetDeviceTensorMemoryRequirementsARM, get_device_tensor_memory_requirements_arm = c"vkGetDeviceTensorMemoryRequirementsARM";
            GetTensorMemoryRequirementsARM, get_tensor_memory_requirements_arm = c"vkGetTensorMemoryRequirementsARM";
        }
        [All(&[Has("VK_ARM_tensors"), Has("VK_EXT_descriptor_buffer")])] {
            GetTensorOpaqueCaptureDescriptorDataARM, get_tensor_opaque_capture_descriptor_data_arm = c"vkGetTensorOpaqueCaptureDescriptorDataARM";
            GetTensorViewOpaqueCaptureDescriptorDataARM, get_tensor_view_opaque_capture_descriptor_data_arm = c"vkGetTensorViewOpaqueCaptureDescriptorDataARM";
        }
        [Has("VK_EXT_attachment_feedback_loop_dynamic_state")] {
            CmdSetAttachmentFeedbackLoopEnableEXT, cmd_set_attachment_feedback_loop_enable_ext = c"vkCmdSetAttachmentFeedbackLoopEnableEXT";
        }
        [Has("VK_EXT_buffer_device_address")] {
            GetBufferDeviceAddressEXT, get_buffer_device_address_ext = c"vkGetBufferDeviceAddressEXT";
        }
        [Has("VK_EXT_calibrated_timestamps")] {
            GetCalibratedTimestampsEXT, get_calibrated_timestamps_ext = c"vkGetCalibratedTimestampsEXT";
        }
        [Has("VK_EXT_color_write_enable")] {
            CmdSetColorWriteEnableEXT, cmd_set_color_write_enable_ext = c"vkCmdSetColorWriteEnableEXT";
        }
        [Has("VK_EXT_conditional_rendering")] {
            CmdBeginConditionalRenderingEXT, cmd_begin_conditional_rendering_ext = c"vkCmdBeginConditionalRenderingEXT";
            CmdEndConditionalRenderingEXT, cmd_end_conditional_rendering_ext = c"vkCmdEndConditionalRenderingEXT";
        }
        [All(&[Has("VK_EXT_custom_resolve"), Any(&[Has("VK_KHR_dynamic_rendering"), Has("VK_VERSION_1_3")])])] {
            CmdBeginCustomResolveEXT, cmd_begin_custom_resolve_ext = c"vkCmdBeginCustomResolveEXT";
        }
        [Has("VK_EXT_debug_marker")] {
            CmdDebugMarkerBeginEXT, cmd_debug_marker_begin_ext = c"vkCmdDebugMarkerBeginEXT";
            CmdDebugMarkerEndEXT, cmd_debug_marker_end_ext = c"vkCmdDebugMarkerEndEXT";
            CmdDebugMarkerInsertEXT, cmd_debug_marker_insert_ext = c"vkCmdDebugMarkerInsertEXT";
            DebugMarkerSetObjectNameEXT, debug_marker_set_object_name_ext = c"vkDebugMarkerSetObjectNameEXT";
            DebugMarkerSetObjectTagEXT, debug_marker_set_object_tag_ext = c"vkDebugMarkerSetObjectTagEXT";
        }
        [Has("VK_EXT_depth_bias_control")] {
            CmdSetDepthBias2EXT, cmd_set_depth_bias2_ext = c"vkCmdSetDepthBias2EXT";
        }
        [Has("VK_EXT_descriptor_buffer")] {
            CmdBindDescriptorBufferEmbeddedSamplersEXT, cmd_bind_descriptor_buffer_embedded_samplers_ext = c"vkCmdBindDescriptorBufferEmbeddedSamplersEXT";
            CmdBindDescriptorBuffersEXT, cmd_bind_descriptor_buffers_ext = c"vkCmdBindDescriptorBuffersEXT";
            CmdSetDescriptorBufferOffsetsEXT, cmd_set_descriptor_buffer_offsets_ext = c"vkCmdSetDescriptorBufferOffsetsEXT";
            GetBufferOpaqueCaptureDescriptorDataEXT, get_buffer_opaque_capture_descriptor_data_ext = c"vkGetBufferOpaqueCaptureDescriptorDataEXT";
            GetDescriptorEXT, get_descriptor_ext = c"vkGetDescriptorEXT";
            GetDescriptorSetLayoutBindingOffsetEXT, get_descriptor_set_layout_binding_offset_ext = c"vkGetDescriptorSetLayoutBindingOffsetEXT";
            GetDescriptorSetLayoutSizeEXT, get_descriptor_set_layout_size_ext = c"vkGetDescriptorSetLayoutSizeEXT";
            GetImageOpaqueCaptureDescriptorDataEXT, get_image_opaque_capture_descriptor_data_ext = c"vkGetImageOpaqueCaptureDescriptorDataEXT";
            GetImageViewOpaqueCaptureDescriptorDataEXT, get_image_view_opaque_capture_descriptor_data_ext = c"vkGetImageViewOpaqueCaptureDescriptorDataEXT";
            GetSamplerOpaqueCaptureDescriptorDataEXT, get_sampler_opaque_capture_descriptor_data_ext = c"vkGetSamplerOpaqueCaptureDescriptorDataEXT";
        }
        [All(&[Has("VK_EXT_descriptor_buffer"), Any(&[Has("VK_KHR_acceleration_structure"), Has("VK_NV_ray_tracing")])])] {
            GetAccelerationStructureOpaqueCaptureDescriptorDataEXT, get_acceleration_structure_opaque_capture_descriptor_data_ext = c"vkGetAccelerationStructureOpaqueCaptureDescriptorDataEXT";
        }
        [Has("VK_EXT_device_fault")] {
            GetDeviceFaultInfoEXT, get_device_fault_info_ext = c"vkGetDeviceFaultInfoEXT";
        }
        [Has("VK_EXT_device_generated_commands")] {
            CmdExecuteGeneratedCommandsEXT, cmd_execute_generated_commands_ext = c"vkCmdExecuteGeneratedCommandsEXT";
            CmdPreprocessGeneratedCommandsEXT, cmd_preprocess_generated_commands_ext = c"vkCmdPreprocessGeneratedCommandsEXT";
            CreateIndirectCommandsLayoutEXT, create_indirect_commands_layout_ext = c"vkCreateIndirectCommandsLayoutEXT";
            CreateIndirectExecutionSetEXT, create_indirect_execution_set_ext = c"vkCreateIndirectExecutionSetEXT";
            DestroyIndirectCommandsLayoutEXT, destroy_indirect_commands_layout_ext = c"vkDestroyIndirectCommandsLayoutEXT";
            DestroyIndirectExecutionSetEXT, destroy_indirect_execution_set_ext = c"vkDestroyIndirectExecutionSetEXT";
            GetGeneratedCommandsMemoryRequirementsEXT, get_generated_commands_memory_requirements_ext = c"vkGetGeneratedCommandsMemoryRequirementsEXT";
            UpdateIndirectExecutionSetPipelineEXT, update_indirect_execution_set_pipeline_ext = c"vkUpdateIndirectExecutionSetPipelineEXT";
            UpdateIndirectExecutionSetShaderEXT, update_indirect_execution_set_shader_ext = c"vkUpdateIndirectExecutionSetShaderEXT";
        }
        [Has("VK_EXT_discard_rectangles")] {
            CmdSetDiscardRectangleEXT, cmd_set_discard_rectangle_ext = c"vkCmdSetDiscardRectangleEXT";
        }
        [All(&[Has("VK_EXT_discard_rectangles"), SpecVersion("VK_EXT_discard_rectangles", 2)])] {
            CmdSetDiscardRectangleEnableEXT, cmd_set_discard_rectangle_enable_ext = c"vkCmdSetDiscardRectangleEnableEXT";
            CmdSetDiscardRectangleModeEXT, cmd_set_discard_rectangle_mode_ext = c"vkCmdSetDiscardRectangleModeEXT";
        }
        [Has("VK_EXT_display_control")] {
            DisplayPowerControlEXT, display_power_control_ext = c"vkDisplayPowerControlEXT";
            GetSwapchainCounterEXT, get_swapchain_counter_ext = c"vkGetSwapchainCounterEXT";
            RegisterDeviceEventEXT, register_device_event_ext = c"vkRegisterDeviceEventEXT";
            RegisterDisplayEventEXT, register_display_event_ext = c"vkRegisterDisplayEventEXT";
        }
        [Has("VK_EXT_external_memory_host")] {
            GetMemoryHostPointerPropertiesEXT, get_memory_host_pointer_properties_ext = c"vkGetMemoryHostPointerPropertiesEXT";
        }
        [Has("VK_EXT_external_memory_metal")] {
            GetMemoryMetalHandleEXT, get_memory_metal_handle_ext = c"vkGetMemoryMetalHandleEXT";
            GetMemoryMetalHandlePropertiesEXT, get_memory_metal_handle_properties_ext = c"vkGetMemoryMetalHandlePropertiesEXT";
        }
        [Has("VK_EXT_fragment_density_map_offset")] {
            CmdEndRendering2EXT, cmd_end_rendering2_ext = c"vkCmdEndRendering2EXT";
        }
        [Has("VK_EXT_full_screen_exclusive")] {
            AcquireFullScreenExclusiveModeEXT, acquire_full_screen_exclusive_mode_ext = c"vkAcquireFullScreenExclusiveModeEXT";
            ReleaseFullScreenExclusiveModeEXT, release_full_screen_exclusive_mode_ext = c"vkReleaseFullScreenExclusiveModeEXT";
        }
        [All(&[Has("VK_EXT_full_screen_exclusive"), Any(&[Has("VK_KHR_device_group"), Has("VK_VERSION_1_1")])])] {
            GetDeviceGroupSurfacePresentModes2EXT, get_device_group_surface_present_modes2_ext = c"vkGetDeviceGroupSurfacePresentModes2EXT";
        }
        [Has("VK_EXT_hdr_metadata")] {
            SetHdrMetadataEXT, set_hdr_metadata_ext = c"vkSetHdrMetadataEXT";
        }
        [Has("VK_EXT_host_image_copy")] {
            CopyImageToImageEXT, copy_image_to_image_ext = c"vkCopyImageToImageEXT";
            CopyImageToMemoryEXT, copy_image_to_memory_ext = c"vkCopyImageToMemoryEXT";
            CopyMemoryToImageEXT, copy_memory_to_image_ext = c"vkCopyMemoryToImageEXT";
            TransitionImageLayoutEXT, transition_image_layout_ext = c"vkTransitionImageLayoutEXT";
        }
        [Has("VK_EXT_host_query_reset")] {
            ResetQueryPoolEXT, reset_query_pool_ext = c"vkResetQueryPoolEXT";
        }
        [Has("VK_EXT_image_drm_format_modifier")] {
            GetImageDrmFormatModifierPropertiesEXT, get_image_drm_format_modifier_properties_ext = c"vkGetImageDrmFormatModifierPropertiesEXT";
        }
        [Has("VK_EXT_line_rasterization")] {
            CmdSetLineStippleEXT, cmd_set_line_stipple_ext = c"vkCmdSetLineStippleEXT";
        }
        [Has("VK_EXT_memory_decompression")] {
            CmdDecompressMemoryEXT, cmd_decompress_memory_ext = c"vkCmdDecompressMemoryEXT";
            CmdDecompressMemoryIndirectCountEXT, cmd_decompress_memory_indirect_count_ext = c"vkCmdDecompressMemoryIndirectCountEXT";
        }
        [Has("VK_EXT_mesh_shader")] {
            CmdDrawMeshTasksEXT, cmd_draw_mesh_tasks_ext = c"vkCmdDrawMeshTasksEXT";
            CmdDrawMeshTasksIndirectEXT, cmd_draw_mesh_tasks_indirect_ext = c"vkCmdDrawMeshTasksIndirectEXT";
        }
        [All(&[Has("VK_EXT_mesh_shader"), Any(&[Has("VK_VERSION_1_2"), Has("VK_KHR_draw_indirect_count"), Has("VK_AMD_draw_indirect_count")])])] {
            CmdDrawMeshTasksIndirectCountEXT, cmd_draw_mesh_tasks_indirect_count_ext = c"vkCmdDrawMeshTasksIndirectCountEXT";
        }
        [Has("VK_EXT_metal_objects")] {
            ExportMetalObjectsEXT, export_metal_objects_ext = c"vkExportMetalObjectsEXT";
        }
        [Has("VK_EXT_multi_draw")] {
            CmdDrawMultiEXT, cmd_draw_multi_ext = c"vkCmdDrawMultiEXT";
            CmdDrawMultiIndexedEXT, cmd_draw_multi_indexed_ext = c"vkCmdDrawMultiIndexedEXT";
        }
        [Has("VK_EXT_opacity_micromap")] {
            BuildMicromapsEXT, build_micromaps_ext = c"vkBuildMicromapsEXT";
            CmdBuildMicromapsEXT, cmd_build_micromaps_ext = c"vkCmdBuildMicromapsEXT";
            CmdCopyMemoryToMicromapEXT, cmd_copy_memory_to_micromap_ext = c"vkCmdCopyMemoryToMicromapEXT";
            CmdCopyMicromapEXT, cmd_copy_micromap_ext = c"vkCmdCopyMicromapEXT";
            CmdCopyMicromapToMemoryEXT, cmd_copy_micromap_to_memory_ext = c"vkCmdCopyMicromapToMemoryEXT";
            CmdWriteMicromapsPropertiesEXT, cmd_write_micromaps_properties_ext = c"vkCmdWriteMicromapsPropertiesEXT";
            CopyMemoryToMicromapEXT, copy_memory_to_micromap_ext = c"vkCopyMemoryToMicromapEXT";
            CopyMicromapEXT, copy_micromap_ext = c"vkCopyMicromapEXT";
            CopyMicromapToMemoryEXT, copy_micromap_to_memory_ext = c"vkCopyMicromapToMemoryEXT";
            CreateMicromapEXT, create_micromap_ext = c"vkCreateMicromapEXT";
            DestroyMicromapEXT, destroy_micromap_ext = c"vkDestroyMicromapEXT";
            GetDeviceMicromapCompatibilityEXT, get_device_micromap_compatibility_ext = c"vkGetDeviceMicromapCompatibilityEXT";
            GetMicromapBuildSizesEXT, get_micromap_build_sizes_ext = c"vkGetMicromapBuildSizesEXT";
            WriteMicromapsPropertiesEXT, write_micromaps_properties_ext = c"vkWriteMicromapsPropertiesEXT";
        }
        [Has("VK_EXT_pageable_device_local_memory")] {
            SetDeviceMemoryPriorityEXT, set_device_memory_priority_ext = c"vkSetDeviceMemoryPriorityEXT";
        }
        [Has("VK_EXT_pipeline_properties")] {
            GetPipelinePropertiesEXT, get_pipeline_properties_ext = c"vkGetPipelinePropertiesEXT";
        }
        [Has("VK_EXT_present_timing")] {
            GetPastPresentationTimingEXT, get_past_presentation_timing_ext = c"vkGetPastPresentationTimingEXT";
            GetSwapchainTimeDomainPropertiesEXT, get_swapchain_time_domain_properties_ext = c"vkGetSwapchainTimeDomainPropertiesEXT";
            GetSwapchainTimingPropertiesEXT, get_swapchain_timing_properties_ext = c"vkGetSwapchainTimingPropertiesEXT";
            SetSwapchainPresentTimingQueueSizeEXT, set_swapchain_present_timing_queue_size_ext = c"vkSetSwapchainPresentTimingQueueSizeEXT";
        }
        [Has("VK_EXT_private_data")] {
            CreatePrivateDataSlotEXT, create_private_data_slot_ext = c"vkCreatePrivateDataSlotEXT";
            DestroyPrivateDataSlotEXT, destroy_private_data_slot_ext = c"vkDestroyPrivateDataSlotEXT";
            GetPrivateDataEXT, get_private_data_ext = c"vkGetPrivateDataEXT";
            SetPrivateDataEXT, set_private_data_ext = c"vkSetPrivateDataEXT";
        }
        [Has("VK_EXT_sample_locations")] {
            CmdSetSampleLocationsEXT, cmd_set_sample_locations_ext = c"vkCmdSetSampleLocationsEXT";
        }
        [Has("VK_EXT_shader_module_identifier")] {
            GetShaderModuleCreateInfoIdentifierEXT, get_shader_module_create_info_identifier_ext = c"vkGetShaderModuleCreateInfoIdentifierEXT";
            GetShaderModuleIdentifierEXT, get_shader_module_identifier_ext = c"vkGetShaderModuleIdentifierEXT";
        }
        [Has("VK_EXT_shader_object")] {
            CmdBindShadersEXT, cmd_bind_shaders_ext = c"vkCmdBindShadersEXT";
            CreateShadersEXT, create_shaders_ext = c"vkCreateShadersEXT";
            DestroyShaderEXT, destroy_shader_ext = c"vkDestroyShaderEXT";
            GetShaderBinaryDataEXT, get_shader_binary_data_ext = c"vkGetShaderBinaryDataEXT";
        }
        [Has("VK_EXT_swapchain_maintenance1")] {
            ReleaseSwapchainImagesEXT, release_swapchain_images_ext = c"vkReleaseSwapchainImagesEXT";
        }
        [Has("VK_EXT_transform_feedback")] {
            CmdBeginQueryIndexedEXT, cmd_begin_query_indexed_ext = c"vkCmdBeginQueryIndexedEXT";
            CmdBeginTransformFeedbackEXT, cmd_begin_transform_feedback_ext = c"vkCmdBeginTransformFeedbackEXT";
            CmdBindTransformFeedbackBuffersEXT, cmd_bind_transform_feedback_buffers_ext = c"vkCmdBindTransformFeedbackBuffersEXT";
            CmdDrawIndirectByteCountEXT, cmd_draw_indirect_byte_count_ext = c"vkCmdDrawIndirectByteCountEXT";
            CmdEndQueryIndexedEXT, cmd_end_query_indexed_ext = c"vkCmdEndQueryIndexedEXT";
            CmdEndTransformFeedbackEXT, cmd_end_transform_feedback_ext = c"vkCmdEndTransformFeedbackEXT";
        }
        [Has("VK_EXT_validation_cache")] {
            CreateValidationCacheEXT, create_validation_cache_ext = c"vkCreateValidationCacheEXT";
            DestroyValidationCacheEXT, destroy_validation_cache_ext = c"vkDestroyValidationCacheEXT";
            GetValidationCacheDataEXT, get_validation_cache_data_ext = c"vkGetValidationCacheDataEXT";
            MergeValidationCachesEXT, merge_validation_caches_ext = c"vkMergeValidationCachesEXT";
        }
        [Has("VK_FUCHSIA_buffer_collection")] {
            CreateBufferCollectionFUCHSIA, create_buffer_collection_fuchsia = c"vkCreateBufferCollectionFUCHSIA";
            DestroyBufferCollectionFUCHSIA, destroy_buffer_collection_fuchsia = c"vkDestroyBufferCollectionFUCHSIA";
            GetBufferCollectionPropertiesFUCHSIA, get_buffer_collection_properties_fuchsia = c"vkGetBufferCollectionPropertiesFUCHSIA";
            SetBufferCollectionBufferConstraintsFUCHSIA, set_buffer_collection_buffer_constraints_fuchsia = c"vkSetBufferCollectionBufferConstraintsFUCHSIA";
            SetBufferCollectionImageConstraintsFUCHSIA, set_buffer_collection_image_constraints_fuchsia = c"vkSetBufferCollectionImageConstraintsFUCHSIA";
        }
        [Has("VK_FUCHSIA_external_memory")] {
            GetMemoryZirconHandleFUCHSIA, get_memory_zircon_handle_fuchsia = c"vkGetMemoryZirconHandleFUCHSIA";
            GetMemoryZirconHandlePropertiesFUCHSIA, get_memory_zircon_handle_properties_fuchsia = c"vkGetMemoryZirconHandlePropertiesFUCHSIA";
        }
        [Has("VK_FUCHSIA_external_semaphore")] {
            GetSemaphoreZirconHandleFUCHSIA, get_semaphore_zircon_handle_fuchsia = c"vkGetSemaphoreZirconHandleFUCHSIA";
            ImportSemaphoreZirconHandleFUCHSIA, import_semaphore_zircon_handle_fuchsia = c"vkImportSemaphoreZirconHandleFUCHSIA";
        }
        [Has("VK_GOOGLE_display_timing")] {
            GetPastPresentationTimingGOOGLE, get_past_presentation_timing_google = c"vkGetPastPresentationTimingGOOGLE";
            GetRefreshCycleDurationGOOGLE, get_refresh_cycle_duration_google = c"vkGetRefreshCycleDurationGOOGLE";
        }
        [Has("VK_HUAWEI_cluster_culling_shader")] {
            CmdDrawClusterHUAWEI, cmd_draw_cluster_huawei = c"vkCmdDrawClusterHUAWEI";
            CmdDrawClusterIndirectHUAWEI, cmd_draw_cluster_indirect_huawei = c"vkCmdDrawClusterIndirectHUAWEI";
        }
        [Has("VK_HUAWEI_invocation_mask")] {
            CmdBindInvocationMaskHUAWEI, cmd_bind_invocation_mask_huawei = c"vkCmdBindInvocationMaskHUAWEI";
        }
        [Has("VK_HUAWEI_subpass_shading")] {
            CmdSubpassShadingHUAWEI, cmd_subpass_shading_huawei = c"vkCmdSubpassShadingHUAWEI";
            GetDeviceSubpassShadingMaxWorkgroupSizeHUAWEI, get_device_subpass_shading_max_workgroup_size_huawei = c"vkGetDeviceSubpassShadingMaxWorkgroupSizeHUAWEI";
        }
        [Has("VK_INTEL_performance_query")] {
            AcquirePerformanceConfigurationINTEL, acquire_performance_configuration_intel = c"vkAcquirePerformanceConfigurationINTEL";
            CmdSetPerformanceMarkerINTEL, cmd_set_performance_marker_intel = c"vkCmdSetPerformanceMarkerINTEL";
            CmdSetPerformanceOverrideINTEL, cmd_set_performance_override_intel = c"vkCmdSetPerformanceOverrideINTEL";
            CmdSetPerformanceStreamMarkerINTEL, cmd_set_performance_stream_marker_intel = c"vkCmdSetPerformanceStreamMarkerINTEL";
            GetPerformanceParameterINTEL, get_performance_parameter_intel = c"vkGetPerformanceParameterINTEL";
            InitializePerformanceApiINTEL, initialize_performance_api_intel = c"vkInitializePerformanceApiINTEL";
            QueueSetPerformanceConfigurationINTEL, queue_set_performance_configuration_intel = c"vkQueueSetPerformanceConfigurationINTEL";
            ReleasePerformanceConfigurationINTEL, release_performance_configuration_intel = c"vkReleasePerformanceConfigurationINTEL";
            UninitializePerformanceApiINTEL, uninitialize_performance_api_intel = c"vkUninitializePerformanceApiINTEL";
        }
        [Has("VK_KHR_acceleration_structure")] {
            BuildAccelerationStructuresKHR, build_acceleration_structures_khr = c"vkBuildAccelerationStructuresKHR";
            CmdBuildAccelerationStructuresIndirectKHR, cmd_build_acceleration_structures_indirect_khr = c"vkCmdBuildAccelerationStructuresIndirectKHR";
            CmdBuildAccelerationStructuresKHR, cmd_build_acceleration_structures_khr = c"vkCmdBuildAccelerationStructuresKHR";
            CmdCopyAccelerationStructureKHR, cmd_copy_acceleration_structure_khr = c"vkCmdCopyAccelerationStructureKHR";
            CmdCopyAccelerationStructureToMemoryKHR, cmd_copy_acceleration_structure_to_memory_khr = c"vkCmdCopyAccelerationStructureToMemoryKHR";
            CmdCopyMemoryToAccelerationStructureKHR, cmd_copy_memory_to_acceleration_structure_khr = c"vkCmdCopyMemoryToAccelerationStructureKHR";
            CmdWriteAccelerationStructuresPropertiesKHR, cmd_write_acceleration_structures_properties_khr = c"vkCmdWriteAccelerationStructuresPropertiesKHR";
            CopyAccelerationStructureKHR, copy_acceleration_structure_khr = c"vkCopyAccelerationStructureKHR";
            CopyAccelerationStructureToMemoryKHR, copy_acceleration_structure_to_memory_khr = c"vkCopyAccelerationStructureToMemoryKHR";
            CopyMemoryToAccelerationStructureKHR, copy_memory_to_acceleration_structure_khr = c"vkCopyMemoryToAccelerationStructureKHR";
            CreateAccelerationStructureKHR, create_acceleration_structure_khr = c"vkCreateAccelerationStructureKHR";
            DestroyAccelerationStructureKHR, destroy_acceleration_structure_khr = c"vkDestroyAccelerationStructureKHR";
            GetAccelerationStructureBuildSizesKHR, get_acceleration_structure_build_sizes_khr = c"vkGetAccelerationStructureBuildSizesKHR";
            GetAccelerationStructureDeviceAddressKHR, get_acceleration_structure_device_address_khr = c"vkGetAccelerationStructureDeviceAddressKHR";
            GetDeviceAccelerationStructureCompatibilityKHR, get_device_acceleration_structure_compatibility_khr = c"vkGetDeviceAccelerationStructureCompatibilityKHR";
            WriteAccelerationStructuresPropertiesKHR, write_acceleration_structures_properties_khr = c"vkWriteAccelerationStructuresPropertiesKHR";
        }
        [Has("VK_KHR_bind_memory2")] {
            BindBufferMemory2KHR, bind_buffer_memory2_khr = c"vkBindBufferMemory2KHR";
            BindImageMemory2KHR, bind_image_memory2_khr = c"vkBindImageMemory2KHR";
        }
        [Has("VK_KHR_buffer_device_address")] {
            GetBufferDeviceAddressKHR, get_buffer_device_address_khr = c"vkGetBufferDeviceAddressKHR";
            GetBufferOpaqueCaptureAddressKHR, get_buffer_opaque_capture_address_khr = c"vkGetBufferOpaqueCaptureAddressKHR";
            GetDeviceMemoryOpaqueCaptureAddressKHR, get_device_memory_opaque_capture_address_khr = c"vkGetDeviceMemoryOpaqueCaptureAddressKHR";
        }
        [Has("VK_KHR_calibrated_timestamps")] {
            GetCalibratedTimestampsKHR, get_calibrated_timestamps_khr = c"vkGetCalibratedTimestampsKHR";
        }
        [Has("VK_KHR_copy_commands2")] {
            CmdBlitImage2KHR, cmd_blit_image2_khr = c"vkCmdBlitImage2KHR";
            CmdCopyBuffer2KHR, cmd_copy_buffer2_khr = c"vkCmdCopyBuffer2KHR";
            CmdCopyBufferToImage2KHR, cmd_copy_buffer_to_image2_khr = c"vkCmdCopyBufferToImage2KHR";
            CmdCopyImage2KHR, cmd_copy_image2_khr = c"vkCmdCopyImage2KHR";
            CmdCopyImageToBuffer2KHR, cmd_copy_image_to_buffer2_khr = c"vkCmdCopyImageToBuffer2KHR";
            CmdResolveImage2KHR, cmd_resolve_image2_khr = c"vkCmdResolveImage2KHR";
        }
        [Has("VK_KHR_copy_memory_indirect")] {
            CmdCopyMemoryIndirectKHR, cmd_copy_memory_indirect_khr = c"vkCmdCopyMemoryIndirectKHR";
            CmdCopyMemoryToImageIndirectKHR, cmd_copy_memory_to_image_indirect_khr = c"vkCmdCopyMemoryToImageIndirectKHR";
        }
        [Has("VK_KHR_create_renderpass2")] {
            CmdBeginRenderPass2KHR, cmd_begin_render_pass2_khr = c"vkCmdBeginRenderPass2KHR";
            CmdEndRenderPass2KHR, cmd_end_render_pass2_khr = c"vkCmdEndRenderPass2KHR";
            CmdNextSubpass2KHR, cmd_next_subpass2_khr = c"vkCmdNextSubpass2KHR";
            CreateRenderPass2KHR, create_render_pass2_khr = c"vkCreateRenderPass2KHR";
        }
        [Has("VK_KHR_deferred_host_operations")] {
            CreateDeferredOperationKHR, create_deferred_operation_khr = c"vkCreateDeferredOperationKHR";
            DeferredOperationJoinKHR, deferred_operation_join_khr = c"vkDeferredOperationJoinKHR";
            DestroyDeferredOperationKHR, destroy_deferred_operation_khr = c"vkDestroyDeferredOperationKHR";
            GetDeferredOperationMaxConcurrencyKHR, get_deferred_operation_max_concurrency_khr = c"vkGetDeferredOperationMaxConcurrencyKHR";
            GetDeferredOperationResultKHR, get_deferred_operation_result_khr = c"vkGetDeferredOperationResultKHR";
        }
        [Has("VK_KHR_descriptor_update_template")] {
            CreateDescriptorUpdateTemplateKHR, create_descriptor_update_template_khr = c"vkCreateDescriptorUpdateTemplateKHR";
            DestroyDescriptorUpdateTemplateKHR, destroy_descriptor_update_template_khr = c"vkDestroyDescriptorUpdateTemplateKHR";
            UpdateDescriptorSetWithTemplateKHR, update_descriptor_set_with_template_khr = c"vkUpdateDescriptorSetWithTemplateKHR";
        }
        [Has("VK_KHR_device_group")] {
            CmdDispatchBaseKHR, cmd_dispatch_base_khr = c"vkCmdDispatchBaseKHR";
            CmdSetDeviceMaskKHR, cmd_set_device_mask_khr = c"vkCmdSetDeviceMaskKHR";
            GetDeviceGroupPeerMemoryFeaturesKHR, get_device_group_peer_memory_features_khr = c"vkGetDeviceGroupPeerMemoryFeaturesKHR";
        }
        [Has("VK_KHR_display_swapchain")] {
            CreateSharedSwapchainsKHR, create_shared_swapchains_khr = c"vkCreateSharedSwapchainsKHR";
        }
        [Has("VK_KHR_draw_indirect_count")] {
            CmdDrawIndexedIndirectCountKHR, cmd_draw_indexed_indirect_count_khr = c"vkCmdDrawIndexedIndirectCountKHR";
            CmdDrawIndirectCountKHR, cmd_draw_indirect_count_khr = c"vkCmdDrawIndirectCountKHR";
        }
        [Has("VK_KHR_dynamic_rendering")] {
            CmdBeginRenderingKHR, cmd_begin_rendering_khr = c"vkCmdBeginRenderingKHR";
            CmdEndRenderingKHR, cmd_end_rendering_khr = c"vkCmdEndRenderingKHR";
        }
        [Has("VK_KHR_dynamic_rendering_local_read")] {
            CmdSetRenderingAttachmentLocationsKHR, cmd_set_rendering_attachment_locations_khr = c"vkCmdSetRenderingAttachmentLocationsKHR";
            CmdSetRenderingInputAttachmentIndicesKHR, cmd_set_rendering_input_attachment_indices_khr = c"vkCmdSetRenderingInputAttachmentIndicesKHR";
        }
        [Has("VK_KHR_external_fence_fd")] {
            GetFenceFdKHR, get_fence_fd_khr = c"vkGetFenceFdKHR";
            ImportFenceFdKHR, import_fence_fd_khr = c"vkImportFenceFdKHR";
        }
        [Has("VK_KHR_external_fence_win32")] {
            GetFenceWin32HandleKHR, get_fence_win32_handle_khr = c"vkGetFenceWin32HandleKHR";
            ImportFenceWin32HandleKHR, import_fence_win32_handle_khr = c"vkImportFenceWin32HandleKHR";
        }
        [Has("VK_KHR_external_memory_fd")] {
            GetMemoryFdKHR, get_memory_fd_khr = c"vkGetMemoryFdKHR";
            GetMemoryFdPropertiesKHR, get_memory_fd_properties_khr = c"vkGetMemoryFdPropertiesKHR";
        }
        [Has("VK_KHR_external_memory_win32")] {
            GetMemoryWin32HandleKHR, get_memory_win32_handle_khr = c"vkGetMemoryWin32HandleKHR";
            GetMemoryWin32HandlePropertiesKHR, get_memory_win32_handle_properties_khr = c"vkGetMemoryWin32HandlePropertiesKHR";
        }
        [Has("VK_KHR_external_semaphore_fd")] {
            GetSemaphoreFdKHR, get_semaphore_fd_khr = c"vkGetSemaphoreFdKHR";
            ImportSemaphoreFdKHR, import_semaphore_fd_khr = c"vkImportSemaphoreFdKHR";
        }
        [Has("VK_KHR_external_semaphore_win32")] {
            GetSemaphoreWin32HandleKHR, get_semaphore_win32_handle_khr = c"vkGetSemaphoreWin32HandleKHR";
            ImportSemaphoreWin32HandleKHR, import_semaphore_win32_handle_khr = c"vkImportSemaphoreWin32HandleKHR";
        }
        [Has("VK_KHR_fragment_shading_rate")] {
            CmdSetFragmentShadingRateKHR, cmd_set_fragment_shading_rate_khr = c"vkCmdSetFragmentShadingRateKHR";
        }
        [Has("VK_KHR_get_memory_requirements2")] {
            GetBufferMemoryRequirements2KHR, get_buffer_memory_requirements2_khr = c"vkGetBufferMemoryRequirements2KHR";
            GetImageMemoryRequirements2KHR, get_image_memory_requirements2_khr = c"vkGetImageMemoryRequirements2KHR";
            GetImageSparseMemoryRequirements2KHR, get_image_sparse_memory_requirements2_khr = c"vkGetImageSparseMemoryRequirements2KHR";
        }
        [Has("VK_KHR_line_rasterization")] {
            CmdSetLineStippleKHR, cmd_set_line_stipple_khr = c"vkCmdSetLineStippleKHR";
        }
        [Has("VK_KHR_maintenance1")] {
            TrimCommandPoolKHR, trim_command_pool_khr = c"vkTrimCommandPoolKHR";
        }
        [Has("VK_KHR_maintenance10")] {
            CmdEndRendering2KHR, cmd_end_rendering2_khr = c"vkCmdEndRendering2KHR";
        }
        [Has("VK_KHR_maintenance3")] {
            GetDescriptorSetLayoutSupportKHR, get_descriptor_set_layout_support_khr = c"vkGetDescriptorSetLayoutSupportKHR";
        }
        [Has("VK_KHR_maintenance4")] {
            GetDeviceBufferMemoryRequirementsKHR, get_device_buffer_memory_requirements_khr = c"vkGetDeviceBufferMemoryRequirementsKHR";
            GetDeviceImageMemoryRequirementsKHR, get_device_image_memory_requirements_khr = c"vkGetDeviceImageMemoryRequirementsKHR";
            GetDeviceImageSparseMemoryRequirementsKHR, get_device_image_sparse_memory_requirements_khr = c"vkGetDeviceImageSparseMemoryRequirementsKHR";
        }
        [Has("VK_KHR_maintenance5")] {
            CmdBindIndexBuffer2KHR, cmd_bind_index_buffer2_khr = c"vkCmdBindIndexBuffer2KHR";
            GetDeviceImageSubresourceLayoutKHR, get_device_image_subresource_layout_khr = c"vkGetDeviceImageSubresourceLayoutKHR";
            GetImageSubresourceLayout2KHR, get_image_subresource_layout2_khr = c"vkGetImageSubresourceLayout2KHR";
            GetRenderingAreaGranularityKHR, get_rendering_area_granularity_khr = c"vkGetRenderingAreaGranularityKHR";
        }
        [Has("VK_KHR_maintenance6")] {
            CmdBindDescriptorSets2KHR, cmd_bind_descriptor_sets2_khr = c"vkCmdBindDescriptorSets2KHR";
            CmdPushConstants2KHR, cmd_push_constants2_khr = c"vkCmdPushConstants2KHR";
        }
        [All(&[Has("VK_KHR_maintenance6"), Has("VK_KHR_push_descriptor")])] {
            CmdPushDescriptorSet2KHR, cmd_push_descriptor_set2_khr = c"vkCmdPushDescriptorSet2KHR";
            CmdPushDescriptorSetWithTemplate2KHR, cmd_push_descriptor_set_with_template2_khr = c"vkCmdPushDescriptorSetWithTemplate2KHR";
        }
        [All(&[Has("VK_KHR_maintenance6"), Has("VK_EXT_descriptor_buffer")])] {
            CmdBindDescriptorBufferEmbeddedSamplers2EXT, cmd_bind_descriptor_buffer_embedded_samplers2_ext = c"vkCmdBindDescriptorBufferEmbeddedSamplers2EXT";
            CmdSetDescriptorBufferOffsets2EXT, cmd_set_descriptor_buffer_offsets2_ext = c"vkCmdSetDescriptorBufferOffsets2EXT";
        }
        [Has("VK_KHR_map_memory2")] {
            MapMemory2KHR, map_memory2_khr = c"vkMapMemory2KHR";
            UnmapMemory2KHR, unmap_memory2_khr = c"vkUnmapMemory2KHR";
        }
        [Has("VK_KHR_performance_query")] {
            AcquireProfilingLockKHR, acquire_profiling_lock_khr = c"vkAcquireProfilingLockKHR";
            ReleaseProfilingLockKHR, release_profiling_lock_khr = c"vkReleaseProfilingLockKHR";
        }
        [Has("VK_KHR_pipeline_binary")] {
            CreatePipelineBinariesKHR, create_pipeline_binaries_khr = c"vkCreatePipelineBinariesKHR";
            DestroyPipelineBinaryKHR, destroy_pipeline_binary_khr = c"vkDestroyPipelineBinaryKHR";
            GetPipelineBinaryDataKHR, get_pipeline_binary_data_khr = c"vkGetPipelineBinaryDataKHR";
            GetPipelineKeyKHR, get_pipeline_key_khr = c"vkGetPipelineKeyKHR";
            ReleaseCapturedPipelineDataKHR, release_captured_pipeline_data_khr = c"vkReleaseCapturedPipelineDataKHR";
        }
        [Has("VK_KHR_pipeline_executable_properties")] {
            GetPipelineExecutableInternalRepresentationsKHR, get_pipeline_executable_internal_representations_khr = c"vkGetPipelineExecutableInternalRepresentationsKHR";
            GetPipelineExecutablePropertiesKHR, get_pipeline_executable_properties_khr = c"vkGetPipelineExecutablePropertiesKHR";
            GetPipelineExecutableStatisticsKHR, get_pipeline_executable_statistics_khr = c"vkGetPipelineExecutableStatisticsKHR";
        }
        [Has("VK_KHR_present_wait")] {
            WaitForPresentKHR, wait_for_present_khr = c"vkWaitForPresentKHR";
        }
        [Has("VK_KHR_present_wait2")] {
            WaitForPresent2KHR, wait_for_present2_khr = c"vkWaitForPresent2KHR";
        }
        [Has("VK_KHR_push_descriptor")] {
            CmdPushDescriptorSetKHR, cmd_push_descriptor_set_khr = c"vkCmdPushDescriptorSetKHR";
        }
        [All(&[Has("VK_KHR_ray_tracing_maintenance1"), Has("VK_KHR_ray_tracing_pipeline")])] {
            CmdTraceRaysIndirect2KHR, cmd_trace_rays_indirect2_khr = c"vkCmdTraceRaysIndirect2KHR";
        }
        [Has("VK_KHR_ray_tracing_pipeline")] {
            CmdSetRayTracingPipelineStackSizeKHR, cmd_set_ray_tracing_pipeline_stack_size_khr = c"vkCmdSetRayTracingPipelineStackSizeKHR";
            CmdTraceRaysIndirectKHR, cmd_trace_rays_indirect_khr = c"vkCmdTraceRaysIndirectKHR";
            CmdTraceRaysKHR, cmd_trace_rays_khr = c"vkCmdTraceRaysKHR";
            CreateRayTracingPipelinesKHR, create_ray_tracing_pipelines_khr = c"vkCreateRayTracingPipelinesKHR";
            GetRayTracingCaptureReplayShaderGroupHandlesKHR, get_ray_tracing_capture_replay_shader_group_handles_khr = c"vkGetRayTracingCaptureReplayShaderGroupHandlesKHR";
            GetRayTracingShaderGroupHandlesKHR, get_ray_tracing_shader_group_handles_khr = c"vkGetRayTracingShaderGroupHandlesKHR";
            GetRayTracingShaderGroupStackSizeKHR, get_ray_tracing_shader_group_stack_size_khr = c"vkGetRayTracingShaderGroupStackSizeKHR";
        }
        [Has("VK_KHR_sampler_ycbcr_conversion")] {
            CreateSamplerYcbcrConversionKHR, create_sampler_ycbcr_conversion_khr = c"vkCreateSamplerYcbcrConversionKHR";
            DestroySamplerYcbcrConversionKHR, destroy_sampler_ycbcr_conversion_khr = c"vkDestroySamplerYcbcrConversionKHR";
        }
        [Has("VK_KHR_shared_presentable_image")] {
            GetSwapchainStatusKHR, get_swapchain_status_khr = c"vkGetSwapchainStatusKHR";
        }
        [Has("VK_KHR_swapchain")] {
            AcquireNextImageKHR, acquire_next_image_khr = c"vkAcquireNextImageKHR";
            CreateSwapchainKHR, create_swapchain_khr = c"vkCreateSwapchainKHR";
            DestroySwapchainKHR, destroy_swapchain_khr = c"vkDestroySwapchainKHR";
            GetSwapchainImagesKHR, get_swapchain_images_khr = c"vkGetSwapchainImagesKHR";
            QueuePresentKHR, queue_present_khr = c"vkQueuePresentKHR";
        }
        [Has("VK_KHR_swapchain_maintenance1")] {
            ReleaseSwapchainImagesKHR, release_swapchain_images_khr = c"vkReleaseSwapchainImagesKHR";
        }
        [Has("VK_KHR_synchronization2")] {
            CmdPipelineBarrier2KHR, cmd_pipeline_barrier2_khr = c"vkCmdPipelineBarrier2KHR";
            CmdResetEvent2KHR, cmd_reset_event2_khr = c"vkCmdResetEvent2KHR";
            CmdSetEvent2KHR, cmd_set_event2_khr = c"vkCmdSetEvent2KHR";
            CmdWaitEvents2KHR, cmd_wait_events2_khr = c"vkCmdWaitEvents2KHR";
            CmdWriteTimestamp2KHR, cmd_write_timestamp2_khr = c"vkCmdWriteTimestamp2KHR";
            QueueSubmit2KHR, queue_submit2_khr = c"vkQueueSubmit2KHR";
        }
        [Has("VK_KHR_timeline_semaphore")] {
            GetSemaphoreCounterValueKHR, get_semaphore_counter_value_khr = c"vkGetSemaphoreCounterValueKHR";
            SignalSemaphoreKHR, signal_semaphore_khr = c"vkSignalSemaphoreKHR";
            WaitSemaphoresKHR, wait_semaphores_khr = c"vkWaitSemaphoresKHR";
        }
        [Has("VK_KHR_video_decode_queue")] {
            CmdDecodeVideoKHR, cmd_decode_video_khr = c"vkCmdDecodeVideoKHR";
        }
        [Has("VK_KHR_video_encode_queue")] {
            CmdEncodeVideoKHR, cmd_encode_video_khr = c"vkCmdEncodeVideoKHR";
            GetEncodedVideoSessionParametersKHR, get_encoded_video_session_parameters_khr = c"vkGetEncodedVideoSessionParametersKHR";
        }
        [Has("VK_KHR_video_queue")] {
            BindVideoSessionMemoryKHR, bind_video_session_memory_khr = c"vkBindVideoSessionMemoryKHR";
            CmdBeginVideoCodingKHR, cmd_begin_video_coding_khr = c"vkCmdBeginVideoCodingKHR";
            CmdControlVideoCodingKHR, cmd_control_video_coding_khr = c"vkCmdControlVideoCodingKHR";
            CmdEndVideoCodingKHR, cmd_end_video_coding_khr = c"vkCmdEndVideoCodingKHR";
            CreateVideoSessionKHR, create_video_session_khr = c"vkCreateVideoSessionKHR";
            CreateVideoSessionParametersKHR, create_video_session_parameters_khr = c"vkCreateVideoSessionParametersKHR";
            DestroyVideoSessionKHR, destroy_video_session_khr = c"vkDestroyVideoSessionKHR";
            DestroyVideoSessionParametersKHR, destroy_video_session_parameters_khr = c"vkDestroyVideoSessionParametersKHR";
            GetVideoSessionMemoryRequirementsKHR, get_video_session_memory_requirements_khr = c"vkGetVideoSessionMemoryRequirementsKHR";
            UpdateVideoSessionParametersKHR, update_video_session_parameters_khr = c"vkUpdateVideoSessionParametersKHR";
        }
        [Has("VK_NVX_binary_import")] {
            CmdCuLaunchKernelNVX, cmd_cu_launch_kernel_nvx = c"vkCmdCuLaunchKernelNVX";
            CreateCuFunctionNVX, create_cu_function_nvx = c"vkCreateCuFunctionNVX";
            CreateCuModuleNVX, create_cu_module_nvx = c"vkCreateCuModuleNVX";
            DestroyCuFunctionNVX, destroy_cu_function_nvx = c"vkDestroyCuFunctionNVX";
            DestroyCuModuleNVX, destroy_cu_module_nvx = c"vkDestroyCuModuleNVX";
        }
        [Has("VK_NVX_image_view_handle")] {
            GetImageViewAddressNVX, get_image_view_address_nvx = c"vkGetImageViewAddressNVX";
            GetImageViewHandle64NVX, get_image_view_handle64_nvx = c"vkGetImageViewHandle64NVX";
            GetImageViewHandleNVX, get_image_view_handle_nvx = c"vkGetImageViewHandleNVX";
        }
        [Has("VK_NV_clip_space_w_scaling")] {
            CmdSetViewportWScalingNV, cmd_set_viewport_w_scaling_nv = c"vkCmdSetViewportWScalingNV";
        }
        [Has("VK_NV_cluster_acceleration_structure")] {
            CmdBuildClusterAccelerationStructureIndirectNV, cmd_build_cluster_acceleration_structure_indirect_nv = c"vkCmdBuildClusterAccelerationStructureIndirectNV";
            GetClusterAccelerationStructureBuildSizesNV, get_cluster_acceleration_structure_build_sizes_nv = c"vkGetClusterAccelerationStructureBuildSizesNV";
        }
        [Has("VK_NV_cooperative_vector")] {
            CmdConvertCooperativeVectorMatrixNV, cmd_convert_cooperative_vector_matrix_nv = c"vkCmdConvertCooperativeVectorMatrixNV";
            ConvertCooperativeVectorMatrixNV, convert_cooperative_vector_matrix_nv = c"vkConvertCooperativeVectorMatrixNV";
        }
        [Has("VK_NV_copy_memory_indirect")] {
            CmdCopyMemoryIndirectNV, cmd_copy_memory_indirect_nv = c"vkCmdCopyMemoryIndirectNV";
            CmdCopyMemoryToImageIndirectNV, cmd_copy_memory_to_image_indirect_nv = c"vkCmdCopyMemoryToImageIndirectNV";
        }
        [Has("VK_NV_cuda_kernel_launch")] {
            CmdCudaLaunchKernelNV, cmd_cuda_launch_kernel_nv = c"vkCmdCudaLaunchKernelNV";
            CreateCudaFunctionNV, create_cuda_function_nv = c"vkCreateCudaFunctionNV";
            CreateCudaModuleNV, create_cuda_module_nv = c"vkCreateCudaModuleNV";
            DestroyCudaFunctionNV, destroy_cuda_function_nv = c"vkDestroyCudaFunctionNV";
            DestroyCudaModuleNV, destroy_cuda_module_nv = c"vkDestroyCudaModuleNV";
            GetCudaModuleCacheNV, get_cuda_module_cache_nv = c"vkGetCudaModuleCacheNV";
        }
        [Has("VK_NV_device_diagnostic_checkpoints")] {
            CmdSetCheckpointNV, cmd_set_checkpoint_nv = c"vkCmdSetCheckpointNV";
            GetQueueCheckpointDataNV, get_queue_checkpoint_data_nv = c"vkGetQueueCheckpointDataNV";
        }
        [All(&[Has("VK_NV_device_diagnostic_checkpoints"), Any(&[Has("VK_VERSION_1_3"), Has("VK_KHR_synchronization2")])])] {
            GetQueueCheckpointData2NV, get_queue_checkpoint_data2_nv = c"vkGetQueueCheckpointData2NV";
        }
        [Has("VK_NV_device_generated_commands")] {
            CmdBindPipelineShaderGroupNV, cmd_bind_pipeline_shader_group_nv = c"vkCmdBindPipelineShaderGroupNV";
            CmdExecuteGeneratedCommandsNV, cmd_execute_generated_commands_nv = c"vkCmdExecuteGeneratedCommandsNV";
            CmdPreprocessGeneratedCommandsNV, cmd_preprocess_generated_commands_nv = c"vkCmdPreprocessGeneratedCommandsNV";
            CreateIndirectCommandsLayoutNV, create_indirect_commands_layout_nv = c"vkCreateIndirectCommandsLayoutNV";
            DestroyIndirectCommandsLayoutNV, destroy_indirect_commands_layout_nv = c"vkDestroyIndirectCommandsLayoutNV";
            GetGeneratedCommandsMemoryRequirementsNV, get_generated_commands_memory_requirements_nv = c"vkGetGeneratedCommandsMemoryRequirementsNV";
        }
        [Has("VK_NV_device_generated_commands_compute")] {
            CmdUpdatePipelineIndirectBufferNV, cmd_update_pipeline_indirect_buffer_nv = c"vkCmdUpdatePipelineIndirectBufferNV";
            GetPipelineIndirectDeviceAddressNV, get_pipeline_indirect_device_address_nv = c"vkGetPipelineIndirectDeviceAddressNV";
            GetPipelineIndirectMemoryRequirementsNV, get_pipeline_indirect_memory_requirements_nv = c"vkGetPipelineIndirectMemoryRequirementsNV";
        }
        [Has("VK_NV_external_compute_queue")] {
            CreateExternalComputeQueueNV, create_external_compute_queue_nv = c"vkCreateExternalComputeQueueNV";
            DestroyExternalComputeQueueNV, destroy_external_compute_queue_nv = c"vkDestroyExternalComputeQueueNV";
            GetExternalComputeQueueDataNV, get_external_compute_queue_data_nv = c"vkGetExternalComputeQueueDataNV";
        }
        [Has("VK_NV_external_memory_rdma")] {
            GetMemoryRemoteAddressNV, get_memory_remote_address_nv = c"vkGetMemoryRemoteAddressNV";
        }
        [Has("VK_NV_external_memory_win32")] {
            GetMemoryWin32HandleNV, get_memory_win32_handle_nv = c"vkGetMemoryWin32HandleNV";
        }
        [Has("VK_NV_fragment_shading_rate_enums")] {
            CmdSetFragmentShadingRateEnumNV, cmd_set_fragment_shading_rate_enum_nv = c"vkCmdSetFragmentShadingRateEnumNV";
        }
        [Has("VK_NV_low_latency2")] {
            GetLatencyTimingsNV, get_latency_timings_nv = c"vkGetLatencyTimingsNV";
            LatencySleepNV, latency_sleep_nv = c"vkLatencySleepNV";
            QueueNotifyOutOfBandNV, queue_notify_out_of_band_nv = c"vkQueueNotifyOutOfBandNV";
            SetLatencyMarkerNV, set_latency_marker_nv = c"vkSetLatencyMarkerNV";
            SetLatencySleepModeNV, set_latency_sleep_mode_nv = c"vkSetLatencySleepModeNV";
        }
        [Has("VK_NV_memory_decompression")] {
            CmdDecompressMemoryIndirectCountNV, cmd_decompress_memory_indirect_count_nv = c"vkCmdDecompressMemoryIndirectCountNV";
            CmdDecompressMemoryNV, cmd_decompress_memory_nv = c"vkCmdDecompressMemoryNV";
        }
        [Has("VK_NV_mesh_shader")] {
            CmdDrawMeshTasksIndirectNV, cmd_draw_mesh_tasks_indirect_nv = c"vkCmdDrawMeshTasksIndirectNV";
            CmdDrawMeshTasksNV, cmd_draw_mesh_tasks_nv = c"vkCmdDrawMeshTasksNV";
        }
        [All(&[Has("VK_NV_mesh_shader"), Any(&[Has("VK_VERSION_1_2"), Has("VK_KHR_draw_indirect_count"), Has("VK_AMD_draw_indirect_count")])])] {
            CmdDrawMeshTasksIndirectCountNV, cmd_draw_mesh_tasks_indirect_count_nv = c"vkCmdDrawMeshTasksIndirectCountNV";
        }
        [Has("VK_NV_optical_flow")] {
            BindOpticalFlowSessionImageNV, bind_optical_flow_session_image_nv = c"vkBindOpticalFlowSessionImageNV";
            CmdOpticalFlowExecuteNV, cmd_optical_flow_execute_nv = c"vkCmdOpticalFlowExecuteNV";
            CreateOpticalFlowSessionNV, create_optical_flow_session_nv = c"vkCreateOpticalFlowSessionNV";
            DestroyOpticalFlowSessionNV, destroy_optical_flow_session_nv = c"vkDestroyOpticalFlowSessionNV";
        }
        [Has("VK_NV_partitioned_acceleration_structure")] {
            CmdBuildPartitionedAccelerationStructuresNV, cmd_build_partitioned_acceleration_structures_nv = c"vkCmdBuildPartitionedAccelerationStructuresNV";
            GetPartitionedAccelerationStructuresBuildSizesNV, get_partitioned_acceleration_structures_build_sizes_nv = c"vkGetPartitionedAccelerationStructuresBuildSizesNV";
        }
        [Has("VK_NV_ray_tracing")] {
            BindAccelerationStructureMemoryNV, bind_acceleration_structure_memory_nv = c"vkBindAccelerationStructureMemoryNV";
            CmdBuildAccelerationStructureNV, cmd_build_acceleration_structure_nv = c"vkCmdBuildAccelerationStructureNV";
            CmdCopyAccelerationStructureNV, cmd_copy_acceleration_structure_nv = c"vkCmdCopyAccelerationStructureNV";
            CmdTraceRaysNV, cmd_trace_rays_nv = c"vkCmdTraceRaysNV";
            CmdWriteAccelerationStructuresPropertiesNV, cmd_write_acceleration_structures_properties_nv = c"vkCmdWriteAccelerationStructuresPropertiesNV";
            CompileDeferredNV, compile_deferred_nv = c"vkCompileDeferredNV";
            CreateAccelerationStructureNV, create_acceleration_structure_nv = c"vkCreateAccelerationStructureNV";
            CreateRayTracingPipelinesNV, create_ray_tracing_pipelines_nv = c"vkCreateRayTracingPipelinesNV";
            DestroyAccelerationStructureNV, destroy_acceleration_structure_nv = c"vkDestroyAccelerationStructureNV";
            GetAccelerationStructureHandleNV, get_acceleration_structure_handle_nv = c"vkGetAccelerationStructureHandleNV";
            GetAccelerationStructureMemoryRequirementsNV, get_acceleration_structure_memory_requirements_nv = c"vkGetAccelerationStructureMemoryRequirementsNV";
            GetRayTracingShaderGroupHandlesNV, get_ray_tracing_shader_group_handles_nv = c"vkGetRayTracingShaderGroupHandlesNV";
        }
        [All(&[Has("VK_NV_scissor_exclusive"), SpecVersion("VK_NV_scissor_exclusive", 2)])] {
            CmdSetExclusiveScissorEnableNV, cmd_set_exclusive_scissor_enable_nv = c"vkCmdSetExclusiveScissorEnableNV";
        }
        [Has("VK_NV_scissor_exclusive")] {
            CmdSetExclusiveScissorNV, cmd_set_exclusive_scissor_nv = c"vkCmdSetExclusiveScissorNV";
        }
        [Has("VK_NV_shading_rate_image")] {
            CmdBindShadingRateImageNV, cmd_bind_shading_rate_image_nv = c"vkCmdBindShadingRateImageNV";
            CmdSetCoarseSampleOrderNV, cmd_set_coarse_sample_order_nv = c"vkCmdSetCoarseSampleOrderNV";
            CmdSetViewportShadingRatePaletteNV, cmd_set_viewport_shading_rate_palette_nv = c"vkCmdSetViewportShadingRatePaletteNV";
        }
        [Has("VK_OHOS_external_memory")] {
            GetMemoryNativeBufferOHOS, get_memory_native_buffer_ohos = c"vkGetMemoryNativeBufferOHOS";
            GetNativeBufferPropertiesOHOS, get_native_buffer_properties_ohos = c"vkGetNativeBufferPropertiesOHOS";
        }
        [Has("VK_OHOS_native_buffer")] {
            AcquireImageOHOS, acquire_image_ohos = c"vkAcquireImageOHOS";
            GetSwapchainGrallocUsageOHOS, get_swapchain_gralloc_usage_ohos = c"vkGetSwapchainGrallocUsageOHOS";
            QueueSignalReleaseImageOHOS, queue_signal_release_image_ohos = c"vkQueueSignalReleaseImageOHOS";
        }
        [Has("VK_QCOM_tile_memory_heap")] {
            CmdBindTileMemoryQCOM, cmd_bind_tile_memory_qcom = c"vkCmdBindTileMemoryQCOM";
        }
        [Has("VK_QCOM_tile_properties")] {
            GetDynamicRenderingTilePropertiesQCOM, get_dynamic_rendering_tile_properties_qcom = c"vkGetDynamicRenderingTilePropertiesQCOM";
            GetFramebufferTilePropertiesQCOM, get_framebuffer_tile_properties_qcom = c"vkGetFramebufferTilePropertiesQCOM";
        }
        [Has("VK_QCOM_tile_shading")] {
            CmdBeginPerTileExecutionQCOM, cmd_begin_per_tile_execution_qcom = c"vkCmdBeginPerTileExecutionQCOM";
            CmdDispatchTileQCOM, cmd_dispatch_tile_qcom = c"vkCmdDispatchTileQCOM";
            CmdEndPerTileExecutionQCOM, cmd_end_per_tile_execution_qcom = c"vkCmdEndPerTileExecutionQCOM";
        }
        [Has("VK_QNX_external_memory_screen_buffer")] {
            GetScreenBufferPropertiesQNX, get_screen_buffer_properties_qnx = c"vkGetScreenBufferPropertiesQNX";
        }
        [Has("VK_VALVE_descriptor_set_host_mapping")] {
            GetDescriptorSetHostMappingVALVE, get_descriptor_set_host_mapping_valve = c"vkGetDescriptorSetHostMappingVALVE";
            GetDescriptorSetLayoutHostMappingInfoVALVE, get_descriptor_set_layout_host_mapping_info_valve = c"vkGetDescriptorSetLayoutHostMappingInfoVALVE";
        }
        [Any(&[Has("VK_EXT_depth_clamp_control"), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_depth_clamp_control")])])] {
            CmdSetDepthClampRangeEXT, cmd_set_depth_clamp_range_ext = c"vkCmdSetDepthClampRangeEXT";
        }
        [Any(&[Has("VK_EXT_extended_dynamic_state"), Has("VK_EXT_shader_object")])] {
            CmdBindVertexBuffers2EXT, cmd_bind_vertex_buffers2_ext = c"vkCmdBindVertexBuffers2EXT";
            CmdSetCullModeEXT, cmd_set_cull_mode_ext = c"vkCmdSetCullModeEXT";
            CmdSetDepthBoundsTestEnableEXT, cmd_set_depth_bounds_test_enable_ext = c"vkCmdSetDepthBoundsTestEnableEXT";
            CmdSetDepthCompareOpEXT, cmd_set_depth_compare_op_ext = c"vkCmdSetDepthCompareOpEXT";
            CmdSetDepthTestEnableEXT, cmd_set_depth_test_enable_ext = c"vkCmdSetDepthTestEnableEXT";
            CmdSetDepthWriteEnableEXT, cmd_set_depth_write_enable_ext = c"vkCmdSetDepthWriteEnableEXT";
            CmdSetFrontFaceEXT, cmd_set_front_face_ext = c"vkCmdSetFrontFaceEXT";
            CmdSetPrimitiveTopologyEXT, cmd_set_primitive_topology_ext = c"vkCmdSetPrimitiveTopologyEXT";
            CmdSetScissorWithCountEXT, cmd_set_scissor_with_count_ext = c"vkCmdSetScissorWithCountEXT";
            CmdSetStencilOpEXT, cmd_set_stencil_op_ext = c"vkCmdSetStencilOpEXT";
            CmdSetStencilTestEnableEXT, cmd_set_stencil_test_enable_ext = c"vkCmdSetStencilTestEnableEXT";
            CmdSetViewportWithCountEXT, cmd_set_viewport_with_count_ext = c"vkCmdSetViewportWithCountEXT";
        }
        [Any(&[Has("VK_EXT_extended_dynamic_state2"), Has("VK_EXT_shader_object")])] {
            CmdSetDepthBiasEnableEXT, cmd_set_depth_bias_enable_ext = c"vkCmdSetDepthBiasEnableEXT";
            CmdSetLogicOpEXT, cmd_set_logic_op_ext = c"vkCmdSetLogicOpEXT";
            CmdSetPatchControlPointsEXT, cmd_set_patch_control_points_ext = c"vkCmdSetPatchControlPointsEXT";
            CmdSetPrimitiveRestartEnableEXT, cmd_set_primitive_restart_enable_ext = c"vkCmdSetPrimitiveRestartEnableEXT";
            CmdSetRasterizerDiscardEnableEXT, cmd_set_rasterizer_discard_enable_ext = c"vkCmdSetRasterizerDiscardEnableEXT";
        }
        [Any(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_shader_object")])] {
            CmdSetAlphaToCoverageEnableEXT, cmd_set_alpha_to_coverage_enable_ext = c"vkCmdSetAlphaToCoverageEnableEXT";
            CmdSetAlphaToOneEnableEXT, cmd_set_alpha_to_one_enable_ext = c"vkCmdSetAlphaToOneEnableEXT";
            CmdSetColorBlendEnableEXT, cmd_set_color_blend_enable_ext = c"vkCmdSetColorBlendEnableEXT";
            CmdSetColorBlendEquationEXT, cmd_set_color_blend_equation_ext = c"vkCmdSetColorBlendEquationEXT";
            CmdSetColorWriteMaskEXT, cmd_set_color_write_mask_ext = c"vkCmdSetColorWriteMaskEXT";
            CmdSetDepthClampEnableEXT, cmd_set_depth_clamp_enable_ext = c"vkCmdSetDepthClampEnableEXT";
            CmdSetLogicOpEnableEXT, cmd_set_logic_op_enable_ext = c"vkCmdSetLogicOpEnableEXT";
            CmdSetPolygonModeEXT, cmd_set_polygon_mode_ext = c"vkCmdSetPolygonModeEXT";
            CmdSetRasterizationSamplesEXT, cmd_set_rasterization_samples_ext = c"vkCmdSetRasterizationSamplesEXT";
            CmdSetSampleMaskEXT, cmd_set_sample_mask_ext = c"vkCmdSetSampleMaskEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Any(&[Has("VK_KHR_maintenance2"), Has("VK_VERSION_1_1")])]), Has("VK_EXT_shader_object")])] {
            CmdSetTessellationDomainOriginEXT, cmd_set_tessellation_domain_origin_ext = c"vkCmdSetTessellationDomainOriginEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_transform_feedback")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_transform_feedback")])])] {
            CmdSetRasterizationStreamEXT, cmd_set_rasterization_stream_ext = c"vkCmdSetRasterizationStreamEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_conservative_rasterization")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_conservative_rasterization")])])] {
            CmdSetConservativeRasterizationModeEXT, cmd_set_conservative_rasterization_mode_ext = c"vkCmdSetConservativeRasterizationModeEXT";
            CmdSetExtraPrimitiveOverestimationSizeEXT, cmd_set_extra_primitive_overestimation_size_ext = c"vkCmdSetExtraPrimitiveOverestimationSizeEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_depth_clip_enable")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_depth_clip_enable")])])] {
            CmdSetDepthClipEnableEXT, cmd_set_depth_clip_enable_ext = c"vkCmdSetDepthClipEnableEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_sample_locations")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_sample_locations")])])] {
            CmdSetSampleLocationsEnableEXT, cmd_set_sample_locations_enable_ext = c"vkCmdSetSampleLocationsEnableEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_blend_operation_advanced")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_blend_operation_advanced")])])] {
            CmdSetColorBlendAdvancedEXT, cmd_set_color_blend_advanced_ext = c"vkCmdSetColorBlendAdvancedEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_provoking_vertex")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_provoking_vertex")])])] {
            CmdSetProvokingVertexModeEXT, cmd_set_provoking_vertex_mode_ext = c"vkCmdSetProvokingVertexModeEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_line_rasterization")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_line_rasterization")])])] {
            CmdSetLineRasterizationModeEXT, cmd_set_line_rasterization_mode_ext = c"vkCmdSetLineRasterizationModeEXT";
            CmdSetLineStippleEnableEXT, cmd_set_line_stipple_enable_ext = c"vkCmdSetLineStippleEnableEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_EXT_depth_clip_control")]), All(&[Has("VK_EXT_shader_object"), Has("VK_EXT_depth_clip_control")])])] {
            CmdSetDepthClipNegativeOneToOneEXT, cmd_set_depth_clip_negative_one_to_one_ext = c"vkCmdSetDepthClipNegativeOneToOneEXT";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_clip_space_w_scaling")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_clip_space_w_scaling")])])] {
            CmdSetViewportWScalingEnableNV, cmd_set_viewport_w_scaling_enable_nv = c"vkCmdSetViewportWScalingEnableNV";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_viewport_swizzle")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_viewport_swizzle")])])] {
            CmdSetViewportSwizzleNV, cmd_set_viewport_swizzle_nv = c"vkCmdSetViewportSwizzleNV";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_fragment_coverage_to_color")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_fragment_coverage_to_color")])])] {
            CmdSetCoverageToColorEnableNV, cmd_set_coverage_to_color_enable_nv = c"vkCmdSetCoverageToColorEnableNV";
            CmdSetCoverageToColorLocationNV, cmd_set_coverage_to_color_location_nv = c"vkCmdSetCoverageToColorLocationNV";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_framebuffer_mixed_samples")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_framebuffer_mixed_samples")])])] {
            CmdSetCoverageModulationModeNV, cmd_set_coverage_modulation_mode_nv = c"vkCmdSetCoverageModulationModeNV";
            CmdSetCoverageModulationTableEnableNV, cmd_set_coverage_modulation_table_enable_nv = c"vkCmdSetCoverageModulationTableEnableNV";
            CmdSetCoverageModulationTableNV, cmd_set_coverage_modulation_table_nv = c"vkCmdSetCoverageModulationTableNV";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_shading_rate_image")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_shading_rate_image")])])] {
            CmdSetShadingRateImageEnableNV, cmd_set_shading_rate_image_enable_nv = c"vkCmdSetShadingRateImageEnableNV";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_representative_fragment_test")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_representative_fragment_test")])])] {
            CmdSetRepresentativeFragmentTestEnableNV, cmd_set_representative_fragment_test_enable_nv = c"vkCmdSetRepresentativeFragmentTestEnableNV";
        }
        [Any(&[All(&[Has("VK_EXT_extended_dynamic_state3"), Has("VK_NV_coverage_reduction_mode")]), All(&[Has("VK_EXT_shader_object"), Has("VK_NV_coverage_reduction_mode")])])] {
            CmdSetCoverageReductionModeNV, cmd_set_coverage_reduction_mode_nv = c"vkCmdSetCoverageReductionModeNV";
        }
        [Any(&[Has("VK_EXT_host_image_copy"), Has("VK_EXT_image_compression_control")])] {
            GetImageSubresourceLayout2EXT, get_image_subresource_layout2_ext = c"vkGetImageSubresourceLayout2EXT";
        }
        [Any(&[Has("VK_EXT_shader_object"), Has("VK_EXT_vertex_input_dynamic_state")])] {
            CmdSetVertexInputEXT, cmd_set_vertex_input_ext = c"vkCmdSetVertexInputEXT";
        }
        [Any(&[All(&[Has("VK_KHR_descriptor_update_template"), Has("VK_KHR_push_descriptor")]), All(&[Has("VK_KHR_push_descriptor"), Any(&[Has("VK_VERSION_1_1"), Has("VK_KHR_descriptor_update_template")])])])] {
            CmdPushDescriptorSetWithTemplateKHR, cmd_push_descriptor_set_with_template_khr = c"vkCmdPushDescriptorSetWithTemplateKHR";
        }
        [Any(&[All(&[Has("VK_KHR_device_group"), Has("VK_KHR_surface")]), All(&[Has("VK_KHR_swapchain"), Has("VK_VERSION_1_1")])])] {
            GetDeviceGroupPresentCapabilitiesKHR, get_device_group_present_capabilities_khr = c"vkGetDeviceGroupPresentCapabilitiesKHR";
            GetDeviceGroupSurfacePresentModesKHR, get_device_group_surface_present_modes_khr = c"vkGetDeviceGroupSurfacePresentModesKHR";
        }
        [Any(&[All(&[Has("VK_KHR_device_group"), Has("VK_KHR_swapchain")]), All(&[Has("VK_KHR_swapchain"), Has("VK_VERSION_1_1")])])] {
            AcquireNextImage2KHR, acquire_next_image2_khr = c"vkAcquireNextImage2KHR";
        }
    }
}
